//! Incompressible fluid properties.

use crate::common::check_finite;
use crate::error::{HydraulicsError, HydraulicsResult};

/// Kinematic viscosity `ν = μ/ρ`. Rejects non-positive density.
pub fn kinematic_viscosity(mu: f64, rho: f64) -> HydraulicsResult<f64> {
    if rho.is_nan() || rho <= 0.0 {
        return Err(HydraulicsError::NonPositiveDensity { value: rho });
    }
    Ok(mu / rho)
}

/// Density and viscosity of a single-phase liquid in the active unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    density: f64,
    dynamic_viscosity: f64,
    kinematic_viscosity: f64,
}

impl FluidProperties {
    /// Create fluid properties. `density` must be > 0 and `dynamic_viscosity` >= 0.
    pub fn new(density: f64, dynamic_viscosity: f64) -> HydraulicsResult<Self> {
        check_finite(density, "density")?;
        check_finite(dynamic_viscosity, "dynamic viscosity")?;
        if dynamic_viscosity.is_nan() || dynamic_viscosity < 0.0 {
            return Err(HydraulicsError::NegativeViscosity {
                value: dynamic_viscosity,
            });
        }
        let nu = kinematic_viscosity(dynamic_viscosity, density)?;
        Ok(Self {
            density,
            dynamic_viscosity,
            kinematic_viscosity: nu,
        })
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn dynamic_viscosity(&self) -> f64 {
        self.dynamic_viscosity
    }

    pub fn kinematic_viscosity(&self) -> f64 {
        self.kinematic_viscosity
    }
}
