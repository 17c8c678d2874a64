//! Error types for root-finding strategies.

use pf_core::error::PfError;
use thiserror::Error;

/// Reasons a single root-finding strategy gives up.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid bracket [{lo}, {hi}]")]
    InvalidBracket { lo: f64, hi: f64 },

    #[error("No sign change over [{lo}, {hi}] (f(lo)={f_lo}, f(hi)={f_hi})")]
    NoSignChange {
        lo: f64,
        hi: f64,
        f_lo: f64,
        f_hi: f64,
    },

    #[error("Maximum iterations {iterations} reached at x={last}")]
    MaxIterations { iterations: usize, last: f64 },

    #[error("Zero or non-finite slope at x={x}")]
    ZeroDerivative { x: f64 },

    #[error("Non-finite residual at x={x}")]
    NonFinite { x: f64 },

    #[error("Degenerate seeds: x0={x0}, x1={x1}")]
    DegenerateSeeds { x0: f64, x1: f64 },

    #[error("Step converged at x={x} but residual {residual} is not small")]
    ResidualTooLarge { x: f64, residual: f64 },

    #[error("Root {root} lies outside the admissible domain")]
    OutsideDomain { root: f64 },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for PfError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::InvalidBracket { .. } => PfError::InvalidArg { what: "bracket" },
            SolverError::NoSignChange { .. } => PfError::InvalidArg { what: "bracket sign" },
            SolverError::MaxIterations { .. } => PfError::InvalidArg {
                what: "convergence",
            },
            SolverError::ZeroDerivative { .. } => PfError::InvalidArg { what: "slope" },
            SolverError::NonFinite { x } => PfError::NonFinite {
                what: "residual",
                value: x,
            },
            SolverError::DegenerateSeeds { .. } => PfError::InvalidArg { what: "seeds" },
            SolverError::ResidualTooLarge { .. } => PfError::InvalidArg {
                what: "convergence",
            },
            SolverError::OutsideDomain { root } => PfError::Domain {
                what: "root",
                value: root,
            },
        }
    }
}
