use crate::key::{key_matches, normalize_key};
use pf_hydraulics::MinorLossBudget;

/// One fitting and its resistance coefficient K.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessoryEntry {
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub k: f64,
}

impl AccessoryEntry {
    pub fn matches_key(&self, key: &str) -> bool {
        key_matches(key, self.display_name, self.aliases)
    }
}

const fn fitting(
    display_name: &'static str,
    aliases: &'static [&'static str],
    k: f64,
) -> AccessoryEntry {
    AccessoryEntry {
        display_name,
        aliases,
        k,
    }
}

const ACCESSORIES: [AccessoryEntry; 29] = [
    // entrances and exits
    fitting("Inlet strainer", &["strainer", "screen"], 0.80),
    fitting("Foot valve", &[], 3.00),
    fitting("Square-edged entrance", &["square entrance", "sharp entrance"], 0.50),
    fitting("Bell-mouth entrance", &["rounded entrance"], 0.10),
    fitting("Re-entrant entrance", &["projecting entrance"], 1.00),
    // area changes
    fitting("Gradual enlargement", &[], 0.30),
    fitting("Sudden enlargement", &[], 0.20),
    fitting("Gradual contraction", &["gradual reduction"], 0.25),
    fitting("Sudden contraction", &["sudden reduction"], 0.35),
    // elbows
    fitting("Short radius elbow 90", &["elbow 90", "90 elbow"], 0.90),
    fitting("Short radius elbow 45", &["elbow 45", "45 elbow"], 0.40),
    fitting("Long radius elbow 90", &["long elbow 90"], 0.40),
    fitting("Long radius elbow 45", &["long elbow 45"], 0.20),
    fitting("Long radius elbow 22.5", &["long elbow 22.5"], 0.10),
    // tees
    fitting("Tee, run", &["straight tee", "tee straight"], 0.10),
    fitting("Tee, branch", &["angle tee", "tee branch"], 1.50),
    fitting("Tee, bilateral outlet", &["bilateral tee"], 1.80),
    // valves
    fitting("Gate valve", &["open gate valve"], 5.00),
    fitting("Angle valve", &["open angle valve"], 5.00),
    fitting("Globe valve", &["open globe valve"], 10.0),
    fitting("Alfalfa valve", &[], 2.00),
    fitting("Check valve", &["non-return valve"], 2.50),
    fitting("Butterfly valve", &["open butterfly valve"], 0.24),
    // other
    fitting("Nozzle", &[], 2.75),
    fitting("Flow controller", &[], 2.50),
    fitting("Venturi meter", &["venturi"], 2.50),
    fitting("Junction", &["confluence"], 0.40),
    fitting("Bifurcation", &[], 0.10),
    fitting("Small branch", &[], 0.03),
];

pub fn accessories() -> &'static [AccessoryEntry] {
    &ACCESSORIES
}

/// Loss coefficient for one fitting; `0.0` for names that are not tabulated.
pub fn minor_loss_k(name: &str) -> f64 {
    let key = normalize_key(name);
    ACCESSORIES
        .iter()
        .find(|a| a.matches_key(&key))
        .map_or(0.0, |a| a.k)
}

/// `ΣK` over `(name, count)` pairs.
pub fn sum_minor_losses<'a, I>(items: I) -> MinorLossBudget
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    MinorLossBudget::from_counts(
        items
            .into_iter()
            .map(|(name, count)| (minor_loss_k(name), count)),
    )
}
