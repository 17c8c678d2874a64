use thiserror::Error;

pub type PfResult<T> = Result<T, PfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown unit system: '{value}' (expected SI or Imperial)")]
    UnknownUnitSystem { value: String },

    #[error("Input domain error: {what} ({value})")]
    Domain { what: &'static str, value: f64 },
}
