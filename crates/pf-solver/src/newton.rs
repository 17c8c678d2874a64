//! Single-seed Newton search with a finite-difference slope.

use crate::derivative::forward_difference;
use crate::error::{SolverError, SolverResult};
use crate::root::{RootConfig, RootOutcome, RootStrategy};

/// Newton iteration seeded at `x0`.
#[derive(Debug, Clone, Copy)]
pub struct Newton {
    pub x0: f64,
    /// Relative perturbation for the slope estimate
    pub epsilon: f64,
}

impl Newton {
    pub fn new(x0: f64) -> Self {
        Self { x0, epsilon: 1e-7 }
    }
}

impl RootStrategy for Newton {
    fn name(&self) -> &'static str {
        "newton"
    }

    fn find_root(
        &self,
        f: &dyn Fn(f64) -> f64,
        config: &RootConfig,
    ) -> SolverResult<RootOutcome> {
        let mut x = self.x0;
        if !x.is_finite() {
            return Err(SolverError::NonFinite { x });
        }

        for iter in 0..config.max_iterations {
            let fx = f(x);
            if !fx.is_finite() {
                return Err(SolverError::NonFinite { x });
            }
            if fx == 0.0 {
                return Ok(RootOutcome {
                    root: x,
                    iterations: iter,
                });
            }

            let slope = forward_difference(f, x, fx, self.epsilon);
            if slope == 0.0 || !slope.is_finite() {
                return Err(SolverError::ZeroDerivative { x });
            }

            let dx = fx / slope;
            let x_new = x - dx;
            if !x_new.is_finite() {
                return Err(SolverError::NonFinite { x: x_new });
            }
            if dx.abs() < config.open_step_tolerance() {
                return config.accept(x_new, f(x_new), iter + 1);
            }
            x = x_new;
        }

        Err(SolverError::MaxIterations {
            iterations: config.max_iterations,
            last: x,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_quadratic() {
        // Solve x^2 - 4 = 0, x > 0
        let f = |x: f64| x * x - 4.0;
        let out = Newton::new(3.0)
            .find_root(&f, &RootConfig::default())
            .unwrap();
        assert!((out.root - 2.0).abs() < 1e-6);
    }

    #[test]
    fn flat_function_reports_zero_slope() {
        let f = |_x: f64| 5.0;
        let err = Newton::new(1.0)
            .find_root(&f, &RootConfig::default())
            .unwrap_err();
        assert!(matches!(err, SolverError::ZeroDerivative { .. }));
    }
}
