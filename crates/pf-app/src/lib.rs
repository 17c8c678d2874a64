//! Shared application service layer for pipeflow.
//!
//! Frontends hand this crate a case definition and get back a formatted
//! result record, a chart series and any diagnostics. Table lookups, the
//! choice between the forward and inverse paths and result formatting all
//! live here so every frontend behaves the same.

pub mod calculate;
pub mod case_service;
pub mod error;
pub mod report;

// Re-export key types for convenience
pub use calculate::{CalculationOutcome, calculate, resolve_case};
pub use case_service::{load_case, validate_case};
pub use error::{AppError, AppResult};
pub use report::{ChartPoint, ChartSeries, Quantity, ResultRecord};
