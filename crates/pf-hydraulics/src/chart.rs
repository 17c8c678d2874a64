//! Head loss versus velocity series for plotting.

use crate::common::linspace;
use crate::error::{HydraulicsError, HydraulicsResult};
use crate::fluid::FluidProperties;
use crate::friction::FrictionFactorSolver;
use crate::head_loss::HeadLossModel;
use crate::pipe::{MinorLossBudget, PipeSegment};
use crate::reynolds::reynolds_number;
use pf_core::UnitSystem;
use rayon::prelude::*;

/// Velocity interval and sample count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRange {
    pub v_min: f64,
    pub v_max: f64,
    pub steps: usize,
}

impl ChartRange {
    pub fn new(v_min: f64, v_max: f64, steps: usize) -> HydraulicsResult<Self> {
        if steps == 0 {
            return Err(HydraulicsError::InvalidSteps { steps });
        }
        if !(v_min.is_finite() && v_max.is_finite()) || v_min > v_max {
            return Err(HydraulicsError::InvalidRange {
                lo: v_min,
                hi: v_max,
            });
        }
        Ok(Self {
            v_min,
            v_max,
            steps,
        })
    }

    /// Range used for reports: 0.5–5 m/s in SI, 1–15 ft/s in Imperial, 20 points.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self {
                v_min: 0.5,
                v_max: 5.0,
                steps: 20,
            },
            UnitSystem::Imperial => Self {
                v_min: 1.0,
                v_max: 15.0,
                steps: 20,
            },
        }
    }
}

/// One retained chart point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSample {
    pub velocity: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub head_loss: f64,
}

/// Restartable sampler of `hL(V)` over a [`ChartRange`].
///
/// Every sample is computed from scratch; nothing carries over between points.
#[derive(Debug, Clone, Copy)]
pub struct HeadLossSweep {
    range: ChartRange,
    model: HeadLossModel,
    nu: f64,
    friction: FrictionFactorSolver,
}

impl HeadLossSweep {
    pub fn new(
        range: ChartRange,
        fluid: &FluidProperties,
        pipe: PipeSegment,
        minor: MinorLossBudget,
        gravity: f64,
    ) -> HydraulicsResult<Self> {
        if range.steps == 0 {
            return Err(HydraulicsError::InvalidSteps { steps: 0 });
        }
        Ok(Self {
            range,
            model: HeadLossModel::new(pipe, minor, gravity),
            nu: fluid.kinematic_viscosity(),
            friction: FrictionFactorSolver::default(),
        })
    }

    pub fn range(&self) -> ChartRange {
        self.range
    }

    /// Evaluate a single velocity.
    pub fn sample_at(&self, velocity: f64) -> ChartSample {
        let pipe = &self.model.pipe;
        let re = reynolds_number(velocity, pipe.diameter(), self.nu);
        let f = self.friction.solve(re, pipe.relative_roughness()).f;
        ChartSample {
            velocity,
            reynolds: re,
            friction_factor: f,
            head_loss: self.model.evaluate(f, velocity).total(),
        }
    }

    /// Fresh iterator over the retained samples (`V > 0` only).
    pub fn samples(&self) -> impl Iterator<Item = ChartSample> + '_ {
        linspace(self.range.v_min, self.range.v_max, self.range.steps)
            .filter(|v| *v > 0.0)
            .map(move |v| self.sample_at(v))
    }

    /// Same samples as [`Self::samples`], evaluated in parallel, in order.
    pub fn par_collect(&self) -> Vec<ChartSample> {
        let velocities: Vec<f64> = linspace(self.range.v_min, self.range.v_max, self.range.steps)
            .filter(|v| *v > 0.0)
            .collect();
        velocities
            .into_par_iter()
            .map(|v| self.sample_at(v))
            .collect()
    }
}
