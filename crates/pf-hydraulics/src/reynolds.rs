//! Reynolds number and flow regime.

/// Upper bound (exclusive) of the laminar regime.
pub const LAMINAR_LIMIT: f64 = 2000.0;

/// `Re = V·D/ν`.
///
/// Returns 0 when `V`, `D` or `ν` is not positive. Callers treat `Re = 0` as a
/// degenerate flow state rather than a fault.
pub fn reynolds_number(velocity: f64, diameter: f64, nu: f64) -> f64 {
    if velocity <= 0.0 || diameter <= 0.0 || nu <= 0.0 {
        return 0.0;
    }
    velocity * diameter / nu
}

/// Flow regime selected by the friction-factor solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// `Re <= 0`
    Invalid,
    /// `0 < Re < 2000`
    Laminar,
    /// `Re >= 2000`
    Turbulent,
}

impl FlowRegime {
    pub fn classify(reynolds: f64) -> Self {
        if reynolds.is_nan() || reynolds <= 0.0 {
            FlowRegime::Invalid
        } else if reynolds < LAMINAR_LIMIT {
            FlowRegime::Laminar
        } else {
            FlowRegime::Turbulent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowRegime::Invalid => "invalid",
            FlowRegime::Laminar => "laminar",
            FlowRegime::Turbulent => "turbulent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_in_100mm_pipe() {
        let re = reynolds_number(2.0, 0.1, 0.001 / 998.0);
        assert!((re - 199_600.0).abs() < 1e-6);
        assert_eq!(FlowRegime::classify(re), FlowRegime::Turbulent);
    }

    #[test]
    fn degenerate_inputs_give_zero() {
        assert_eq!(reynolds_number(0.0, 0.1, 1e-6), 0.0);
        assert_eq!(reynolds_number(-1.0, 0.1, 1e-6), 0.0);
        assert_eq!(reynolds_number(1.0, 0.0, 1e-6), 0.0);
        assert_eq!(reynolds_number(1.0, 0.1, 0.0), 0.0);
        assert_eq!(FlowRegime::classify(0.0), FlowRegime::Invalid);
    }

    #[test]
    fn regime_boundary() {
        assert_eq!(FlowRegime::classify(1999.999), FlowRegime::Laminar);
        assert_eq!(FlowRegime::classify(2000.0), FlowRegime::Turbulent);
    }
}
