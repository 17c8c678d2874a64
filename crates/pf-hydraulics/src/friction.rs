//! Darcy friction factor via the Colebrook-White equation.
//!
//! Laminar flow uses `f = 64/Re` directly. Turbulent flow solves the implicit
//! Colebrook-White equation with an ordered fallback chain:
//!
//! 1. Brent over `f ∈ [1e-6, 0.1]`, only if the residual changes sign there
//! 2. secant seeded at `0.8·f₀` and `1.2·f₀`, clamped to the bracket
//! 3. Newton seeded at `f₀`
//! 4. the explicit Swamee-Jain estimate `f₀` itself, with a diagnostic
//!
//! Unconverged turbulent cases are expected for extreme inputs and are
//! reported, not treated as errors.

use crate::reynolds::FlowRegime;
use pf_core::{Diagnostic, Diagnostics};
use pf_solver::{Bracket, Newton, RootConfig, Secant, StrategyChain};
use tracing::{debug, warn};

/// Search bracket for the turbulent solve.
pub const F_BRACKET: (f64, f64) = (1e-6, 0.1);

/// Initial guess used when the explicit approximation is not finite.
pub const F_FALLBACK_GUESS: f64 = 0.02;

/// Residual reported for trial `f <= 0`. Smaller than
/// [`pf_core::DOMAIN_SENTINEL`], which the velocity residual uses.
pub const F_DOMAIN_SENTINEL: f64 = 1e6;

/// How the returned friction factor was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrictionMethod {
    /// `Re <= 0`: no friction factor, `f = 0`.
    Degenerate,
    /// `64/Re`.
    Laminar,
    /// A root-finding strategy converged (name of the strategy).
    Colebrook(&'static str),
    /// Every strategy failed; the explicit estimate was returned.
    ExplicitFallback,
}

impl FrictionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrictionMethod::Degenerate => "degenerate",
            FrictionMethod::Laminar => "laminar",
            FrictionMethod::Colebrook(name) => name,
            FrictionMethod::ExplicitFallback => "swamee-jain fallback",
        }
    }
}

/// Friction factor plus everything a caller may want to report about it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrictionSolution {
    pub f: f64,
    pub regime: FlowRegime,
    pub method: FrictionMethod,
    pub diagnostics: Diagnostics,
}

impl FrictionSolution {
    pub fn converged(&self) -> bool {
        !matches!(
            self.method,
            FrictionMethod::ExplicitFallback | FrictionMethod::Degenerate
        )
    }
}

/// Colebrook-White residual `1/√f + 2·log10(ε/D/3.7 + 2.51/(Re·√f))`.
///
/// Returns [`F_DOMAIN_SENTINEL`] for `f <= 0` so no strategy evaluates the
/// formula outside its domain.
pub fn colebrook_residual(f: f64, reynolds: f64, relative_roughness: f64) -> f64 {
    if f <= 0.0 {
        return F_DOMAIN_SENTINEL;
    }
    let sqrt_f = f.sqrt();
    1.0 / sqrt_f + 2.0 * (relative_roughness / 3.7 + 2.51 / (reynolds * sqrt_f)).log10()
}

/// Swamee-Jain explicit approximation `0.25 / [log10(ε/D/3.7 + 5.74/Re^0.9)]²`.
///
/// `None` when the expression is not a finite positive number.
pub fn swamee_jain(reynolds: f64, relative_roughness: f64) -> Option<f64> {
    let log_term = (relative_roughness / 3.7 + 5.74 / reynolds.powf(0.9)).log10();
    let f = 0.25 / (log_term * log_term);
    (f.is_finite() && f > 0.0).then_some(f)
}

/// Turbulent starting point: Swamee-Jain, or [`F_FALLBACK_GUESS`].
pub fn initial_guess(reynolds: f64, relative_roughness: f64) -> f64 {
    swamee_jain(reynolds, relative_roughness).unwrap_or(F_FALLBACK_GUESS)
}

/// Colebrook-White solver. Stateless apart from its root-search settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrictionFactorSolver {
    pub config: RootConfig,
}

impl FrictionFactorSolver {
    pub fn new(config: RootConfig) -> Self {
        Self { config }
    }

    /// Friction factor for `(Re, ε/D)`.
    pub fn solve(&self, reynolds: f64, relative_roughness: f64) -> FrictionSolution {
        let regime = FlowRegime::classify(reynolds);
        match regime {
            FlowRegime::Invalid => {
                debug!(reynolds, "invalid Reynolds number, friction factor set to 0");
                FrictionSolution {
                    f: 0.0,
                    regime,
                    method: FrictionMethod::Degenerate,
                    diagnostics: vec![Diagnostic::InvalidReynolds { reynolds }].into(),
                }
            }
            FlowRegime::Laminar => FrictionSolution {
                f: 64.0 / reynolds,
                regime,
                method: FrictionMethod::Laminar,
                diagnostics: Diagnostics::new(),
            },
            FlowRegime::Turbulent => self.solve_turbulent(reynolds, relative_roughness),
        }
    }

    fn solve_turbulent(&self, reynolds: f64, relative_roughness: f64) -> FrictionSolution {
        let residual = |f: f64| colebrook_residual(f, reynolds, relative_roughness);
        let f0 = initial_guess(reynolds, relative_roughness);
        let (lo, hi) = F_BRACKET;

        let chain = StrategyChain::new(self.config)
            .then(Bracket::new(lo, hi))
            .then(Secant::new((0.8 * f0).max(lo), (1.2 * f0).min(hi)))
            .then(Newton::new(f0));

        let outcome = chain.solve(&residual);
        match outcome.solution {
            Some(sol) => FrictionSolution {
                f: sol.root,
                regime: FlowRegime::Turbulent,
                method: FrictionMethod::Colebrook(sol.strategy),
                diagnostics: Diagnostics::new(),
            },
            None => {
                warn!(
                    reynolds,
                    relative_roughness,
                    fallback = f0,
                    "Colebrook-White did not converge, using explicit estimate"
                );
                FrictionSolution {
                    f: f0,
                    regime: FlowRegime::Turbulent,
                    method: FrictionMethod::ExplicitFallback,
                    diagnostics: vec![Diagnostic::FrictionNotConverged {
                        reynolds,
                        relative_roughness,
                        fallback: f0,
                    }]
                    .into(),
                }
            }
        }
    }
}

/// Friction factor with default solver settings.
pub fn friction_factor(reynolds: f64, relative_roughness: f64) -> FrictionSolution {
    FrictionFactorSolver::default().solve(reynolds, relative_roughness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laminar_is_exact() {
        let sol = friction_factor(1000.0, 0.001);
        assert_eq!(sol.f, 0.064);
        assert_eq!(sol.method, FrictionMethod::Laminar);
        assert!(sol.diagnostics.is_empty());
    }

    #[test]
    fn invalid_reynolds_gives_zero_with_diagnostic() {
        for re in [0.0, -50.0] {
            let sol = friction_factor(re, 0.001);
            assert_eq!(sol.f, 0.0);
            assert!(sol.diagnostics.contains_code("invalid_reynolds"));
            assert!(!sol.converged());
        }
    }

    #[test]
    fn turbulent_satisfies_colebrook() {
        let sol = friction_factor(199_600.0, 4.5e-4);
        assert!(sol.converged());
        assert_eq!(sol.method, FrictionMethod::Colebrook("brent"));
        assert!(colebrook_residual(sol.f, 199_600.0, 4.5e-4).abs() < 1e-6);
        // Moody chart neighbourhood
        assert!(sol.f > 0.017 && sol.f < 0.020, "f = {}", sol.f);
    }

    #[test]
    fn smooth_pipe_close_to_swamee_jain() {
        let re = 1e5;
        let sol = friction_factor(re, 0.0);
        let sj = swamee_jain(re, 0.0).unwrap();
        assert!((sol.f - sj).abs() / sol.f < 0.03);
    }

    #[test]
    fn residual_sentinel_outside_domain() {
        assert_eq!(colebrook_residual(0.0, 1e5, 0.0), F_DOMAIN_SENTINEL);
        assert_eq!(colebrook_residual(-0.01, 1e5, 0.0), F_DOMAIN_SENTINEL);
    }

    #[test]
    fn friction_plateau_sits_above_bracket_residuals() {
        assert!(F_DOMAIN_SENTINEL < pf_core::DOMAIN_SENTINEL);
        for (re, rel) in [(2.0e3, 0.0), (1.0e8, 0.0), (1.0e8, 0.05)] {
            for f in [F_BRACKET.0, F_BRACKET.1] {
                assert!(colebrook_residual(f, re, rel).abs() < F_DOMAIN_SENTINEL / 100.0);
            }
        }
    }

    #[test]
    fn explicit_guess_falls_back_to_constant() {
        // log10(1) = 0 makes Swamee-Jain blow up
        assert_eq!(swamee_jain(f64::INFINITY, 3.7), None);
        assert_eq!(initial_guess(f64::INFINITY, 3.7), F_FALLBACK_GUESS);
    }

    #[test]
    fn unsolvable_roughness_uses_fallback() {
        // Negative relative roughness drives the logarithm out of its domain
        // for every trial f; no strategy can converge.
        let sol = friction_factor(5e3, -1.0);
        assert_eq!(sol.method, FrictionMethod::ExplicitFallback);
        assert_eq!(sol.f, initial_guess(5e3, -1.0));
        assert!(sol.diagnostics.contains_code("friction_not_converged"));
    }
}
