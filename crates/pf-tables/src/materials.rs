use crate::key::{key_matches, normalize_key};
use pf_core::UnitSystem;

/// Commercial and welded steel, used for any material not in the table (m).
pub const DEFAULT_ROUGHNESS_M: f64 = 6.0e-5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialEntry {
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    /// Absolute wall roughness in metres.
    pub roughness_m: f64,
}

impl MaterialEntry {
    pub fn matches_key(&self, key: &str) -> bool {
        key_matches(key, self.display_name, self.aliases)
    }
}

const MATERIALS: [MaterialEntry; 14] = [
    MaterialEntry {
        display_name: "Plastic (PE, PVC)",
        aliases: &["plastic", "pvc", "pe", "polyethylene"],
        roughness_m: 1.5e-6,
    },
    MaterialEntry {
        display_name: "Glass-fibre reinforced polyester",
        aliases: &["grp", "frp", "fiberglass"],
        roughness_m: 1.0e-5,
    },
    MaterialEntry {
        display_name: "Drawn steel tubing",
        aliases: &["drawn steel", "drawn tubing"],
        roughness_m: 2.4e-6,
    },
    MaterialEntry {
        display_name: "Brass and copper tubing",
        aliases: &["brass", "copper"],
        roughness_m: 1.5e-6,
    },
    MaterialEntry {
        display_name: "Cement-lined cast iron",
        aliases: &["cement lined cast iron"],
        roughness_m: 2.4e-6,
    },
    MaterialEntry {
        display_name: "Bitumen-lined cast iron",
        aliases: &["bitumen lined cast iron"],
        roughness_m: 2.4e-6,
    },
    MaterialEntry {
        display_name: "Centrifugally cast iron",
        aliases: &["centrifugal cast iron", "spun cast iron"],
        roughness_m: 3.0e-6,
    },
    MaterialEntry {
        display_name: "Commercial and welded steel",
        aliases: &["commercial steel", "welded steel", "steel"],
        roughness_m: DEFAULT_ROUGHNESS_M,
    },
    MaterialEntry {
        display_name: "Asphalted cast iron",
        aliases: &["asphalt dipped cast iron"],
        roughness_m: 1.2e-4,
    },
    MaterialEntry {
        display_name: "Cast iron",
        aliases: &[],
        roughness_m: 3.6e-4,
    },
    MaterialEntry {
        display_name: "Wrought iron",
        aliases: &[],
        roughness_m: 6.0e-5,
    },
    MaterialEntry {
        display_name: "Galvanized iron",
        aliases: &["galvanized steel", "galvanised iron"],
        roughness_m: 1.5e-4,
    },
    MaterialEntry {
        display_name: "Wood stave",
        aliases: &["wood"],
        roughness_m: 5.4e-4,
    },
    MaterialEntry {
        display_name: "Concrete",
        aliases: &[],
        roughness_m: 1.65e-3,
    },
];

pub fn materials() -> &'static [MaterialEntry] {
    &MATERIALS
}

/// Roughness in metres; commercial steel for unknown names.
pub fn roughness_m(material: &str) -> f64 {
    let key = normalize_key(material);
    MATERIALS
        .iter()
        .find(|m| m.matches_key(&key))
        .map_or(DEFAULT_ROUGHNESS_M, |m| m.roughness_m)
}

/// Roughness in the active system's length unit.
pub fn roughness(material: &str, system: UnitSystem) -> f64 {
    system.length_from_meters(roughness_m(material))
}
