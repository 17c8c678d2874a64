// pf-core/src/units.rs

use crate::PfError;
use std::fmt;
use std::str::FromStr;
use uom::si::f64::Length;

pub mod constants {
    /// Gravitational acceleration used by the SI system (m/s²).
    pub const G_SI: f64 = 9.81;
    /// Gravitational acceleration used by the Imperial system (ft/s²).
    pub const G_IMPERIAL: f64 = 32.2;
    /// ft·lbf/s per horsepower.
    pub const FT_LBF_PER_S_PER_HP: f64 = 550.0;
}

/// Active unit convention for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitSystem {
    /// m, kg, s
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "SI", alias = "si"))]
    Si,
    /// ft, slug, s
    #[cfg_attr(
        feature = "serde",
        serde(alias = "imperial", alias = "INGLES", alias = "ingles", alias = "english")
    )]
    Imperial,
}

/// Labels for every quantity the engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabels {
    pub gravity: &'static str,
    pub length: &'static str,
    pub velocity: &'static str,
    pub flow_rate: &'static str,
    pub pressure: &'static str,
    pub density: &'static str,
    pub kinematic_viscosity: &'static str,
    pub power: &'static str,
}

const SI_LABELS: UnitLabels = UnitLabels {
    gravity: "m/s²",
    length: "m",
    velocity: "m/s",
    flow_rate: "m³/s",
    pressure: "Pa",
    density: "kg/m³",
    kinematic_viscosity: "m²/s",
    power: "W",
};

const IMPERIAL_LABELS: UnitLabels = UnitLabels {
    gravity: "ft/s²",
    length: "ft",
    velocity: "ft/s",
    flow_rate: "ft³/s",
    pressure: "lbf/ft²",
    density: "slug/ft³",
    kinematic_viscosity: "ft²/s",
    power: "hp",
};

impl UnitSystem {
    /// Gravitational acceleration in the system's base units.
    #[inline]
    pub fn gravity(self) -> f64 {
        match self {
            UnitSystem::Si => constants::G_SI,
            UnitSystem::Imperial => constants::G_IMPERIAL,
        }
    }

    pub fn labels(self) -> &'static UnitLabels {
        match self {
            UnitSystem::Si => &SI_LABELS,
            UnitSystem::Imperial => &IMPERIAL_LABELS,
        }
    }

    /// Express a length given in metres in this system's length unit.
    pub fn length_from_meters(self, meters: f64) -> f64 {
        use uom::si::length::{foot, meter};
        match self {
            UnitSystem::Si => meters,
            UnitSystem::Imperial => Length::new::<meter>(meters).get::<foot>(),
        }
    }

    /// Divisor turning `Q·ΔP` (base units) into the reported power unit.
    #[inline]
    pub fn power_divisor(self) -> f64 {
        match self {
            UnitSystem::Si => 1.0,
            UnitSystem::Imperial => constants::FT_LBF_PER_S_PER_HP,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Si => write!(f, "SI"),
            UnitSystem::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = PfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "si" | "metric" => Ok(UnitSystem::Si),
            "imperial" | "ingles" | "english" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(PfError::UnknownUnitSystem {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn gravity_per_system() {
        assert_eq!(UnitSystem::Si.gravity(), 9.81);
        assert_eq!(UnitSystem::Imperial.gravity(), 32.2);
    }

    #[test]
    fn labels_per_system() {
        assert_eq!(UnitSystem::Si.labels().pressure, "Pa");
        assert_eq!(UnitSystem::Imperial.labels().power, "hp");
        assert_eq!(UnitSystem::Imperial.labels().velocity, "ft/s");
    }

    #[test]
    fn length_conversion() {
        let ft = UnitSystem::Imperial.length_from_meters(1.0);
        assert!((ft - 3.280_839_895).abs() < 1e-6);
        assert_eq!(UnitSystem::Si.length_from_meters(0.1), 0.1);
    }

    #[test]
    fn parse_selector() {
        assert_eq!("SI".parse::<UnitSystem>().unwrap(), UnitSystem::Si);
        assert_eq!(" INGLES ".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert!("furlongs".parse::<UnitSystem>().is_err());
    }

    proptest! {
        #[test]
        fn display_parses_back(imperial in any::<bool>(), pad in 0usize..3, upper in any::<bool>()) {
            let system = if imperial { UnitSystem::Imperial } else { UnitSystem::Si };
            let mut text = system.to_string();
            if upper {
                text = text.to_uppercase();
            }
            let padded = format!("{}{}{}", " ".repeat(pad), text, " ".repeat(pad));
            prop_assert_eq!(padded.parse::<UnitSystem>().unwrap(), system);
        }

        #[test]
        fn length_conversion_is_linear(a in -1e4f64..1e4, b in -1e4f64..1e4, k in -100.0f64..100.0) {
            for system in [UnitSystem::Si, UnitSystem::Imperial] {
                let lhs = system.length_from_meters(k * a + b);
                let rhs = k * system.length_from_meters(a) + system.length_from_meters(b);
                let scale = 1.0 + (k * a).abs() + b.abs();
                prop_assert!((lhs - rhs).abs() <= 1e-10 * scale);
            }
        }
    }
}
