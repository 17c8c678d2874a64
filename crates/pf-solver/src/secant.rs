//! Two-point secant search.

use crate::error::{SolverError, SolverResult};
use crate::root::{RootConfig, RootOutcome, RootStrategy};

/// Secant iteration from two seeds.
#[derive(Debug, Clone, Copy)]
pub struct Secant {
    pub x0: f64,
    pub x1: f64,
}

impl Secant {
    pub fn new(x0: f64, x1: f64) -> Self {
        Self { x0, x1 }
    }
}

impl RootStrategy for Secant {
    fn name(&self) -> &'static str {
        "secant"
    }

    fn find_root(
        &self,
        f: &dyn Fn(f64) -> f64,
        config: &RootConfig,
    ) -> SolverResult<RootOutcome> {
        let (mut p0, mut p1) = (self.x0, self.x1);
        if !(p0.is_finite() && p1.is_finite()) || p0 == p1 {
            return Err(SolverError::DegenerateSeeds { x0: p0, x1: p1 });
        }

        let mut q0 = f(p0);
        let mut q1 = f(p1);
        if !q0.is_finite() {
            return Err(SolverError::NonFinite { x: p0 });
        }
        if !q1.is_finite() {
            return Err(SolverError::NonFinite { x: p1 });
        }
        // Keep the better seed in p1
        if q1.abs() > q0.abs() {
            std::mem::swap(&mut p0, &mut p1);
            std::mem::swap(&mut q0, &mut q1);
        }

        for iter in 0..config.max_iterations {
            if q1 == 0.0 {
                return Ok(RootOutcome {
                    root: p1,
                    iterations: iter,
                });
            }
            // Flat secant line: no information about where the root is
            if q1 == q0 {
                return Err(SolverError::ZeroDerivative { x: p1 });
            }

            let p = p1 - q1 * (p1 - p0) / (q1 - q0);
            if !p.is_finite() {
                return Err(SolverError::NonFinite { x: p });
            }
            if (p - p1).abs() < config.open_step_tolerance() {
                return config.accept(p, f(p), iter + 1);
            }

            p0 = p1;
            q0 = q1;
            p1 = p;
            q1 = f(p1);
            if !q1.is_finite() {
                return Err(SolverError::NonFinite { x: p1 });
            }
        }

        Err(SolverError::MaxIterations {
            iterations: config.max_iterations,
            last: p1,
        })
    }
}
