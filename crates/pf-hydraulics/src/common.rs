//! Common utilities for hydraulic calculations.

use crate::error::{HydraulicsError, HydraulicsResult};
use pf_core::numeric::ensure_finite;

/// Ensure a value is finite, returning HydraulicsError if not.
pub fn check_finite(value: f64, what: &'static str) -> HydraulicsResult<()> {
    ensure_finite(value, what).map_err(|_| HydraulicsError::NonPhysical { what })?;
    Ok(())
}

/// Cross-sectional area of a circular pipe, `πD²/4`.
#[inline]
pub fn circular_area(diameter: f64) -> f64 {
    std::f64::consts::PI * diameter * diameter / 4.0
}

/// Uniform partition of `[lo, hi]` into `n` points, endpoint included.
pub fn linspace(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> + Clone {
    let delta = if n > 1 { (hi - lo) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| if n > 1 && i == n - 1 { hi } else { lo + i as f64 * delta })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert!(check_finite(1.0, "test").is_ok());
        assert!(check_finite(f64::INFINITY, "test").is_err());
        assert!(check_finite(f64::NAN, "test").is_err());
    }

    #[test]
    fn test_circular_area() {
        assert!((circular_area(0.1) - 0.007_853_981_633_974_483).abs() < 1e-15);
        assert_eq!(circular_area(0.0), 0.0);
    }

    #[test]
    fn test_linspace() {
        let pts: Vec<f64> = linspace(0.5, 5.0, 10).collect();
        assert_eq!(pts.len(), 10);
        assert_eq!(pts[0], 0.5);
        assert!((pts[1] - 1.0).abs() < 1e-12);
        assert_eq!(pts[9], 5.0);

        let single: Vec<f64> = linspace(2.0, 9.0, 1).collect();
        assert_eq!(single, vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 0).count(), 0);
    }
}
