//! Darcy-Weisbach major loss plus minor losses.

use crate::pipe::{MinorLossBudget, PipeSegment};

/// `V²/(2g)`.
#[inline]
pub fn velocity_head(velocity: f64, gravity: f64) -> f64 {
    velocity * velocity / (2.0 * gravity)
}

/// Head loss split into its friction and fitting parts (length units).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadLoss {
    pub friction: f64,
    pub minor: f64,
}

impl HeadLoss {
    pub fn total(&self) -> f64 {
        self.friction + self.minor
    }
}

/// `H_f = f·(L/D)·V²/2g` and `H_m = ΣK·V²/2g`.
///
/// Returns an all-zero loss when `D <= 0` or `g <= 0`.
pub fn head_loss_breakdown(
    f: f64,
    length: f64,
    diameter: f64,
    velocity: f64,
    sum_k: f64,
    gravity: f64,
) -> HeadLoss {
    if diameter <= 0.0 || gravity <= 0.0 {
        return HeadLoss::default();
    }
    let vh = velocity_head(velocity, gravity);
    HeadLoss {
        friction: f * (length / diameter) * vh,
        minor: sum_k * vh,
    }
}

/// Total head loss `hL = H_f + H_m`; 0 for `D <= 0` or `g <= 0`.
pub fn total_head_loss(
    f: f64,
    length: f64,
    diameter: f64,
    velocity: f64,
    sum_k: f64,
    gravity: f64,
) -> f64 {
    head_loss_breakdown(f, length, diameter, velocity, sum_k, gravity).total()
}

/// Head loss model bound to one pipe, its fittings and a gravity constant.
#[derive(Debug, Clone, Copy)]
pub struct HeadLossModel {
    pub pipe: PipeSegment,
    pub minor: MinorLossBudget,
    pub gravity: f64,
}

impl HeadLossModel {
    pub fn new(pipe: PipeSegment, minor: MinorLossBudget, gravity: f64) -> Self {
        Self {
            pipe,
            minor,
            gravity,
        }
    }

    pub fn evaluate(&self, f: f64, velocity: f64) -> HeadLoss {
        head_loss_breakdown(
            f,
            self.pipe.length(),
            self.pipe.diameter(),
            velocity,
            self.minor.value(),
            self.gravity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friction_and_minor_parts() {
        let hl = head_loss_breakdown(0.02, 100.0, 0.1, 2.0, 1.5, 9.81);
        let vh = 4.0 / 19.62;
        assert!((hl.friction - 0.02 * 1000.0 * vh).abs() < 1e-12);
        assert!((hl.minor - 1.5 * vh).abs() < 1e-12);
        assert!((hl.total() - (20.0 + 1.5) * vh).abs() < 1e-12);
    }

    #[test]
    fn degenerate_geometry_or_gravity_gives_zero() {
        assert_eq!(total_head_loss(0.02, 100.0, 0.0, 2.0, 1.0, 9.81), 0.0);
        assert_eq!(total_head_loss(0.02, 100.0, 0.1, 2.0, 1.0, 0.0), 0.0);
        assert_eq!(total_head_loss(0.02, 100.0, -0.1, 2.0, 1.0, 9.81), 0.0);
    }

    #[test]
    fn model_matches_free_function() {
        let pipe = PipeSegment::new(50.0, 0.05, 1e-5).unwrap();
        let model = HeadLossModel::new(pipe, MinorLossBudget::new(2.0), 9.81);
        let a = model.evaluate(0.025, 1.2).total();
        let b = total_head_loss(0.025, 50.0, 0.05, 1.2, 2.0, 9.81);
        assert_eq!(a, b);
    }
}
