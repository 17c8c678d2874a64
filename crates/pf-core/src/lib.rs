//! pf-core: stable foundation for pipeflow.
//!
//! Contains:
//! - units (SI / Imperial unit systems, gravity, unit labels)
//! - numeric (Real, the domain sentinel, float helpers)
//! - diagnostics (non-fatal notes attached to results)
//! - error (shared error types)

pub mod diagnostics;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{PfError, PfResult};
pub use numeric::*;
pub use units::{UnitLabels, UnitSystem};
