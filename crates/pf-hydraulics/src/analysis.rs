//! Forward path for one pipe segment: Re → f → hL → ΔP → power.

use crate::chart::{ChartRange, HeadLossSweep};
use crate::energy::FlowState;
use crate::error::HydraulicsResult;
use crate::fluid::FluidProperties;
use crate::friction::{FrictionFactorSolver, FrictionSolution};
use crate::head_loss::{HeadLoss, HeadLossModel};
use crate::pipe::{MinorLossBudget, PipeSegment};
use crate::power::{check_efficiency, pressure_drop, pumping_power};
use crate::reynolds::reynolds_number;
use crate::velocity::{VelocitySearch, VelocitySolver};
use pf_core::{Diagnostics, UnitSystem};

/// Everything the forward path produces for one flow state.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowAnalysis {
    pub flow: FlowState,
    pub reynolds: f64,
    pub friction: FrictionSolution,
    pub head_loss: HeadLoss,
    pub pressure_drop: f64,
    pub power: f64,
}

impl FlowAnalysis {
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.friction.diagnostics
    }
}

/// Fluid, pipe and fittings in one unit system.
#[derive(Debug, Clone, Copy)]
pub struct PipeFlow {
    pub system: UnitSystem,
    pub fluid: FluidProperties,
    pub pipe: PipeSegment,
    pub minor: MinorLossBudget,
    pub friction: FrictionFactorSolver,
}

impl PipeFlow {
    pub fn new(
        system: UnitSystem,
        fluid: FluidProperties,
        pipe: PipeSegment,
        minor: MinorLossBudget,
    ) -> Self {
        Self {
            system,
            fluid,
            pipe,
            minor,
            friction: FrictionFactorSolver::default(),
        }
    }

    pub fn gravity(&self) -> f64 {
        self.system.gravity()
    }

    pub fn head_loss_model(&self) -> HeadLossModel {
        HeadLossModel::new(self.pipe, self.minor, self.gravity())
    }

    /// Run the forward path at `flow`.
    ///
    /// The efficiency is checked before anything is computed.
    pub fn analyze(&self, flow: FlowState, efficiency: f64) -> HydraulicsResult<FlowAnalysis> {
        check_efficiency(efficiency)?;
        let g = self.gravity();
        let v = flow.velocity();

        let reynolds = reynolds_number(v, self.pipe.diameter(), self.fluid.kinematic_viscosity());
        let friction = self.friction.solve(reynolds, self.pipe.relative_roughness());
        let head_loss = self.head_loss_model().evaluate(friction.f, v);
        let dp = pressure_drop(self.fluid.density(), g, head_loss.total());
        let power = pumping_power(flow.flow_rate(), dp, self.system, efficiency)?;

        Ok(FlowAnalysis {
            flow,
            reynolds,
            friction,
            head_loss,
            pressure_drop: dp,
            power,
        })
    }

    /// Forward path from a known velocity.
    pub fn analyze_velocity(&self, velocity: f64, efficiency: f64) -> HydraulicsResult<FlowAnalysis> {
        self.analyze(FlowState::from_velocity(velocity, self.pipe.area()), efficiency)
    }

    /// Forward path from a known volumetric flow rate.
    pub fn analyze_flow_rate(&self, flow_rate: f64, efficiency: f64) -> HydraulicsResult<FlowAnalysis> {
        self.analyze(FlowState::from_flow_rate(flow_rate, self.pipe.area()), efficiency)
    }

    pub fn velocity_solver(&self, search: VelocitySearch) -> VelocitySolver {
        let mut solver = VelocitySolver::new(self.fluid, self.pipe, self.minor, self.gravity())
            .with_search(search);
        solver.friction = self.friction;
        solver
    }

    pub fn sweep(&self, range: ChartRange) -> HydraulicsResult<HeadLossSweep> {
        HeadLossSweep::new(range, &self.fluid, self.pipe, self.minor, self.gravity())
    }
}
