//! pf-hydraulics: steady incompressible flow through one straight pipe.
//!
//! Provides:
//! - Reynolds number and flow regime
//! - Darcy friction factor (Colebrook-White with an ordered fallback chain)
//! - Darcy-Weisbach head loss, minor losses, pressure drop and pump power
//! - the inverse velocity solve for a two-point energy balance
//! - head loss versus velocity series for plotting
//!
//! Everything is a pure function of its inputs. Non-fatal notes travel back
//! on the results as [`pf_core::Diagnostics`]; input-domain problems are
//! [`HydraulicsError`]s.
//!
//! # Example
//!
//! ```
//! use pf_core::UnitSystem;
//! use pf_hydraulics::{FluidProperties, MinorLossBudget, PipeFlow, PipeSegment};
//!
//! let water = FluidProperties::new(998.0, 0.001).unwrap();
//! let pipe = PipeSegment::new(100.0, 0.1, 4.5e-5).unwrap();
//! let flow = PipeFlow::new(UnitSystem::Si, water, pipe, MinorLossBudget::zero());
//!
//! let result = flow.analyze_velocity(2.0, 0.75).unwrap();
//! println!("hL = {:.2} m, ΔP = {:.0} Pa", result.head_loss.total(), result.pressure_drop);
//! ```

pub mod analysis;
pub mod chart;
pub mod common;
pub mod energy;
pub mod error;
pub mod fluid;
pub mod friction;
pub mod head_loss;
pub mod pipe;
pub mod power;
pub mod reynolds;
pub mod velocity;

// Re-exports
pub use analysis::{FlowAnalysis, PipeFlow};
pub use chart::{ChartRange, ChartSample, HeadLossSweep};
pub use energy::{EnergyBoundary, FlowState, available_head};
pub use error::{HydraulicsError, HydraulicsResult};
pub use fluid::{FluidProperties, kinematic_viscosity};
pub use friction::{
    FrictionFactorSolver, FrictionMethod, FrictionSolution, colebrook_residual, friction_factor,
    swamee_jain,
};
pub use head_loss::{HeadLoss, HeadLossModel, total_head_loss, velocity_head};
pub use pipe::{MinorLossBudget, PipeSegment};
pub use power::{pressure_drop, pumping_power};
pub use reynolds::{FlowRegime, LAMINAR_LIMIT, reynolds_number};
pub use velocity::{VelocityOutcome, VelocitySearch, VelocitySolver};
