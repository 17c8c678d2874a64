//! Error types for hydraulic calculations.

use pf_core::error::PfError;
use thiserror::Error;

/// Input-domain errors. Each one stops the current calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    #[error("Density must be positive (got {value})")]
    NonPositiveDensity { value: f64 },

    #[error("Dynamic viscosity must not be negative (got {value})")]
    NegativeViscosity { value: f64 },

    #[error("Pump efficiency must lie in (0, 1] (got {value})")]
    InvalidEfficiency { value: f64 },

    #[error("Internal diameter is zero or negative (diameter {diameter}, area {area})")]
    NonPositiveArea { diameter: f64, area: f64 },

    #[error("Invalid pipe geometry: {what} = {value}")]
    InvalidGeometry { what: &'static str, value: f64 },

    #[error("Chart steps must be a positive integer (got {steps})")]
    InvalidSteps { steps: usize },

    #[error("Invalid range [{lo}, {hi}]")]
    InvalidRange { lo: f64, hi: f64 },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

impl From<HydraulicsError> for PfError {
    fn from(e: HydraulicsError) -> Self {
        match e {
            HydraulicsError::NonPositiveDensity { value } => PfError::Domain {
                what: "density",
                value,
            },
            HydraulicsError::NegativeViscosity { value } => PfError::Domain {
                what: "viscosity",
                value,
            },
            HydraulicsError::InvalidEfficiency { value } => PfError::Domain {
                what: "efficiency",
                value,
            },
            HydraulicsError::NonPositiveArea { area, .. } => PfError::Domain {
                what: "area",
                value: area,
            },
            HydraulicsError::InvalidGeometry { what, value } => PfError::Domain { what, value },
            HydraulicsError::InvalidSteps { steps } => PfError::Domain {
                what: "steps",
                value: steps as f64,
            },
            HydraulicsError::InvalidRange { .. } => PfError::InvalidArg { what: "range" },
            HydraulicsError::NonPhysical { what } => PfError::InvalidArg { what },
        }
    }
}
