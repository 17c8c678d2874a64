//! Shared configuration, outcome and strategy trait.

use crate::error::{SolverError, SolverResult};

/// Root search configuration.
#[derive(Debug, Clone, Copy)]
pub struct RootConfig {
    /// Maximum iterations per strategy
    pub max_iterations: usize,
    /// Absolute tolerance on x
    pub xtol: f64,
    /// Relative tolerance on x
    pub rtol: f64,
    /// Absolute step tolerance for open (non-bracketing) methods
    pub open_xtol: f64,
    /// Largest |f(x)| an open (non-bracketing) method may accept as a root
    pub ftol: f64,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            xtol: 2e-12,
            rtol: 4.0 * f64::EPSILON,
            open_xtol: 1.48e-8,
            ftol: 1e-6,
        }
    }
}

impl RootConfig {
    /// Step size below which an iterate counts as converged.
    #[inline]
    pub fn step_tolerance(&self, x: f64) -> f64 {
        self.xtol + self.rtol * x.abs()
    }

    /// Step size below which a secant or Newton iterate counts as converged.
    ///
    /// Looser than [`Self::step_tolerance`]: the residuals these methods see
    /// may themselves come from an inner iterative solve.
    #[inline]
    pub fn open_step_tolerance(&self) -> f64 {
        self.open_xtol
    }

    /// Accept a converged open-method iterate only if its residual is small.
    pub fn accept(&self, root: f64, residual: f64, iterations: usize) -> SolverResult<RootOutcome> {
        if residual.abs() <= self.ftol {
            Ok(RootOutcome { root, iterations })
        } else {
            Err(SolverError::ResidualTooLarge { x: root, residual })
        }
    }
}

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootOutcome {
    pub root: f64,
    pub iterations: usize,
}

/// One way of finding a root of a scalar function.
pub trait RootStrategy: Send + Sync {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Search for a root of `f`. Any failure is returned, never raised.
    fn find_root(&self, f: &dyn Fn(f64) -> f64, config: &RootConfig)
    -> SolverResult<RootOutcome>;
}
