//! Inverse problem: the velocity that closes the energy balance.
//!
//! Solves `F(V) = hL(V) − Δ = 0`, where every evaluation of `hL(V)` repeats
//! the forward path (Reynolds number, Colebrook-White, Darcy-Weisbach) at the
//! trial velocity. Strategy order:
//!
//! 1. Brent over `[v_min, v_max]` when `F` changes sign there
//! 2. secant seeded at `0.5·V_est` and `1.5·V_est`, `V_est = √(2gΔ)`
//! 3. Newton seeded at the bracket midpoint
//!
//! There is no numeric fallback: if all three fail the caller gets
//! [`VelocityOutcome::NoSolution`].

use crate::energy::{EnergyBoundary, FlowState};
use crate::error::{HydraulicsError, HydraulicsResult};
use crate::fluid::FluidProperties;
use crate::friction::FrictionFactorSolver;
use crate::head_loss::total_head_loss;
use crate::pipe::{MinorLossBudget, PipeSegment};
use crate::reynolds::reynolds_number;
use pf_core::numeric::DOMAIN_SENTINEL;
use pf_core::{Diagnostic, Diagnostics};
use pf_solver::{Bracket, Newton, RootConfig, Secant, SolverError, StrategyChain};
use tracing::{debug, warn};

/// Velocity search interval (length units per second).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocitySearch {
    pub v_min: f64,
    pub v_max: f64,
}

impl Default for VelocitySearch {
    fn default() -> Self {
        Self {
            v_min: 1e-3,
            v_max: 20.0,
        }
    }
}

impl VelocitySearch {
    pub fn new(v_min: f64, v_max: f64) -> HydraulicsResult<Self> {
        if !(v_min.is_finite() && v_max.is_finite()) || v_min <= 0.0 || v_min >= v_max {
            return Err(HydraulicsError::InvalidRange {
                lo: v_min,
                hi: v_max,
            });
        }
        Ok(Self { v_min, v_max })
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * (self.v_min + self.v_max)
    }

    /// Secant seeds around `V_est = √(2gΔ)` (midpoint when `Δ <= 0`).
    ///
    /// The lower seed is raised to `v_min` and the upper one capped at
    /// `v_max`. Coinciding seeds are replaced by `(midpoint, v_max)`.
    pub fn secant_seeds(&self, gravity: f64, available_head: f64) -> (f64, f64) {
        let v_est = if available_head > 0.0 {
            (2.0 * gravity * available_head).sqrt()
        } else {
            self.midpoint()
        };
        let x0 = (0.5 * v_est).max(self.v_min);
        let x1 = (1.5 * v_est).min(self.v_max);
        if x0 == x1 {
            (self.midpoint(), self.v_max)
        } else {
            (x0, x1)
        }
    }
}

/// Result of the inverse solve. `NoSolution` is a normal outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum VelocityOutcome {
    Solved {
        flow: FlowState,
        strategy: &'static str,
        iterations: usize,
        available_head: f64,
    },
    NoSolution {
        available_head: f64,
        failures: Vec<(&'static str, SolverError)>,
    },
}

impl VelocityOutcome {
    pub fn flow(&self) -> Option<FlowState> {
        match self {
            VelocityOutcome::Solved { flow, .. } => Some(*flow),
            VelocityOutcome::NoSolution { .. } => None,
        }
    }

    pub fn available_head(&self) -> f64 {
        match self {
            VelocityOutcome::Solved { available_head, .. }
            | VelocityOutcome::NoSolution { available_head, .. } => *available_head,
        }
    }

    pub fn diagnostics(&self) -> Diagnostics {
        match self {
            VelocityOutcome::Solved { .. } => Diagnostics::new(),
            VelocityOutcome::NoSolution { available_head, .. } => {
                vec![Diagnostic::VelocityNotConverged {
                    available_head: *available_head,
                }]
                .into()
            }
        }
    }
}

/// Solves for the velocity through one pipe segment given an energy boundary.
#[derive(Debug, Clone, Copy)]
pub struct VelocitySolver {
    pub fluid: FluidProperties,
    pub pipe: PipeSegment,
    pub minor: MinorLossBudget,
    pub gravity: f64,
    pub search: VelocitySearch,
    pub config: RootConfig,
    pub friction: FrictionFactorSolver,
}

impl VelocitySolver {
    pub fn new(
        fluid: FluidProperties,
        pipe: PipeSegment,
        minor: MinorLossBudget,
        gravity: f64,
    ) -> Self {
        Self {
            fluid,
            pipe,
            minor,
            gravity,
            search: VelocitySearch::default(),
            config: RootConfig::default(),
            friction: FrictionFactorSolver::default(),
        }
    }

    pub fn with_search(mut self, search: VelocitySearch) -> Self {
        self.search = search;
        self
    }

    pub fn with_config(mut self, config: RootConfig) -> Self {
        self.config = config;
        self
    }

    /// Forward head loss at trial velocity `v`.
    pub fn head_loss_at(&self, v: f64) -> f64 {
        let d = self.pipe.diameter();
        let re = reynolds_number(v, d, self.fluid.kinematic_viscosity());
        let f = self.friction.solve(re, self.pipe.relative_roughness()).f;
        total_head_loss(f, self.pipe.length(), d, v, self.minor.value(), self.gravity)
    }

    /// `F(V) = hL(V) − Δ`, with a large sentinel outside the physical domain.
    pub fn residual(&self, v: f64, available_head: f64) -> f64 {
        if v <= 0.0 || self.pipe.diameter() == 0.0 {
            return DOMAIN_SENTINEL;
        }
        self.head_loss_at(v) - available_head
    }

    pub fn solve(&self, boundary: &EnergyBoundary) -> VelocityOutcome {
        let delta = boundary.available_head(self.fluid.density(), self.gravity);
        self.solve_for_head(delta)
    }

    /// Solve for the velocity whose head loss equals `available_head`.
    pub fn solve_for_head(&self, available_head: f64) -> VelocityOutcome {
        let residual = |v: f64| self.residual(v, available_head);
        let (x0, x1) = self.search.secant_seeds(self.gravity, available_head);

        // Residual acceptance scales with the head being balanced
        let config = RootConfig {
            ftol: self.config.ftol * available_head.abs().max(1.0),
            ..self.config
        };

        let chain = StrategyChain::new(config)
            .then(Bracket::new(self.search.v_min, self.search.v_max))
            .then(Secant::new(x0, x1))
            .then(Newton::new(self.search.midpoint()));

        let outcome = chain.solve(&residual);
        match outcome.solution {
            Some(sol) => {
                debug!(
                    velocity = sol.root,
                    strategy = sol.strategy,
                    iterations = sol.iterations,
                    "velocity solved"
                );
                VelocityOutcome::Solved {
                    flow: FlowState::from_velocity(sol.root, self.pipe.area()),
                    strategy: sol.strategy,
                    iterations: sol.iterations,
                    available_head,
                }
            }
            None => {
                warn!(
                    available_head,
                    attempts = outcome.failures.len(),
                    "velocity solve did not converge"
                );
                VelocityOutcome::NoSolution {
                    available_head,
                    failures: outcome.failures,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_solver::RootStrategy;

    fn water_solver() -> VelocitySolver {
        VelocitySolver::new(
            FluidProperties::new(998.0, 0.001).unwrap(),
            PipeSegment::new(100.0, 0.1, 4.5e-5).unwrap(),
            MinorLossBudget::zero(),
            9.81,
        )
    }

    #[test]
    fn recovers_forward_velocity() {
        let solver = water_solver();
        let hl = solver.head_loss_at(2.0);
        let out = solver.solve(&EnergyBoundary::pressure_only(998.0 * 9.81 * hl, 0.0));
        let flow = out.flow().unwrap();
        assert!((flow.velocity() - 2.0).abs() / 2.0 < 1e-6);
        assert!((flow.flow_rate() - flow.velocity() * solver.pipe.area()).abs() < 1e-15);
        assert!(out.diagnostics().is_empty());
    }

    #[test]
    fn gravity_driven_flow() {
        let solver = water_solver();
        let out = solver.solve(&EnergyBoundary::new(0.0, 0.0, 3.0, 0.0));
        match out {
            VelocityOutcome::Solved { flow, strategy, .. } => {
                assert_eq!(strategy, "brent");
                assert!(flow.velocity() > 0.0);
                assert!((solver.head_loss_at(flow.velocity()) - 3.0).abs() < 1e-6);
            }
            other => panic!("expected a solution, got {other:?}"),
        }
    }

    #[test]
    fn adverse_energy_has_no_solution() {
        let solver = water_solver();
        let out = solver.solve(&EnergyBoundary::new(0.0, 0.0, 0.0, 10.0));
        assert!(out.flow().is_none());
        assert!(out.available_head() < 0.0);
        assert!(out.diagnostics().contains_code("velocity_not_converged"));
        if let VelocityOutcome::NoSolution { failures, .. } = out {
            assert_eq!(failures.len(), 3);
            assert_eq!(failures[0].0, "brent");
        }
    }

    #[test]
    fn residual_guards_domain() {
        let solver = water_solver();
        assert_eq!(solver.residual(0.0, 1.0), DOMAIN_SENTINEL);
        assert_eq!(solver.residual(-2.0, 1.0), DOMAIN_SENTINEL);
    }

    #[test]
    fn search_bounds_validated() {
        assert!(VelocitySearch::new(0.0, 10.0).is_err());
        assert!(VelocitySearch::new(5.0, 1.0).is_err());
        let s = VelocitySearch::new(0.5, 4.5).unwrap();
        assert_eq!(s.midpoint(), 2.5);
    }

    #[test]
    fn secant_seeds_clamped() {
        let s = VelocitySearch::default();
        let (x0, x1) = s.secant_seeds(9.81, 1.0);
        let v_est = (2.0f64 * 9.81).sqrt();
        assert!((x0 - 0.5 * v_est).abs() < 1e-12);
        assert!((x1 - 1.5 * v_est).abs() < 1e-12);
        let (x0, x1) = s.secant_seeds(9.81, -1.0);
        assert_eq!((x0, x1), (0.5 * s.midpoint(), 1.5 * s.midpoint()));
        let (x0, x1) = s.secant_seeds(9.81, 1e6);
        assert!(x0 > 20.0);
        assert_eq!(x1, 20.0);
    }

    #[test]
    fn secant_seeds_never_coincide() {
        // 0.5·V_est lands exactly on v_max
        let s = VelocitySearch::new(1.0, 10.0).unwrap();
        let head = 400.0 / (2.0 * 9.81);
        let (x0, x1) = s.secant_seeds(9.81, head);
        assert_ne!(x0, x1);
        assert_eq!((x0, x1), (s.midpoint(), 10.0));

        for head in [1e-9, 0.01, 1.0, 50.0, 1e4, 1e8] {
            let (x0, x1) = VelocitySearch::default().secant_seeds(9.81, head);
            assert_ne!(x0, x1, "head {head}");
        }
    }

    #[test]
    fn secant_solves_beyond_search_range() {
        let solver = water_solver();
        let hl = solver.head_loss_at(30.0);
        let (x0, x1) = solver.search.secant_seeds(9.81, hl);
        let config = RootConfig {
            ftol: RootConfig::default().ftol * hl,
            ..RootConfig::default()
        };
        let residual = |v: f64| solver.residual(v, hl);
        let sol = Secant::new(x0, x1).find_root(&residual, &config).unwrap();
        assert!((sol.root - 30.0).abs() / 30.0 < 1e-6);
    }
}
