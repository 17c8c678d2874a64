//! Pressure drop and pumping power.

use crate::error::{HydraulicsError, HydraulicsResult};
use pf_core::UnitSystem;

/// `ΔP = ρ·g·hL`.
#[inline]
pub fn pressure_drop(density: f64, gravity: f64, head_loss: f64) -> f64 {
    density * gravity * head_loss
}

/// Reject efficiencies outside `(0, 1]`.
pub fn check_efficiency(efficiency: f64) -> HydraulicsResult<f64> {
    if efficiency.is_nan() || efficiency <= 0.0 || efficiency > 1.0 {
        return Err(HydraulicsError::InvalidEfficiency { value: efficiency });
    }
    Ok(efficiency)
}

/// Shaft power needed to push `flow_rate` through `pressure_drop`.
///
/// SI: `Q·ΔP/η` in W. Imperial: `Q·ΔP` is in ft·lbf/s and is divided by 550
/// to give hp before dividing by `η`. The efficiency is validated first.
pub fn pumping_power(
    flow_rate: f64,
    pressure_drop: f64,
    system: UnitSystem,
    efficiency: f64,
) -> HydraulicsResult<f64> {
    let eta = check_efficiency(efficiency)?;
    let brute = flow_rate * pressure_drop;
    Ok(brute / system.power_divisor() / eta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_from_head() {
        assert!((pressure_drop(998.0, 9.81, 2.0) - 19_580.76).abs() < 1e-9);
    }

    #[test]
    fn si_power_in_watts() {
        let p = pumping_power(0.01, 20_000.0, UnitSystem::Si, 0.8).unwrap();
        assert!((p - 250.0).abs() < 1e-9);
    }

    #[test]
    fn imperial_power_in_hp() {
        let p = pumping_power(1.0, 550.0, UnitSystem::Imperial, 1.0).unwrap();
        assert!((p - 1.0).abs() < 1e-12);
        let p = pumping_power(1.0, 550.0, UnitSystem::Imperial, 0.5).unwrap();
        assert!((p - 2.0).abs() < 1e-12);
    }

    #[test]
    fn bad_efficiency_is_domain_error() {
        for eta in [0.0, -0.3, 1.5, f64::NAN] {
            assert!(matches!(
                pumping_power(0.01, 1000.0, UnitSystem::Si, eta),
                Err(HydraulicsError::InvalidEfficiency { .. })
            ));
        }
    }
}
