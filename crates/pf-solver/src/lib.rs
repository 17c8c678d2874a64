//! Scalar root finding for pipeflow.
//!
//! Every search here is a bounded, synchronous iteration over a plain
//! `Fn(f64) -> f64`. Failures are ordinary values: a strategy that cannot find
//! a root returns a [`SolverError`], and a [`StrategyChain`] moves on to the
//! next strategy instead of propagating it.

pub mod bracket;
pub mod chain;
pub mod derivative;
pub mod error;
pub mod newton;
pub mod root;
pub mod secant;

pub use bracket::{Bracket, brent};
pub use chain::{ChainOutcome, ChainSolution, RootDomain, StrategyChain};
pub use derivative::forward_difference;
pub use error::{SolverError, SolverResult};
pub use newton::Newton;
pub use root::{RootConfig, RootOutcome, RootStrategy};
pub use secant::Secant;
