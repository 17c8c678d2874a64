//! Lookup tables: pipe schedule diameters, wall roughness and fitting loss
//! coefficients.
//!
//! Lookups never fail. Keys are normalized with [`normalize_key`], unknown
//! materials fall back to commercial steel and unknown fittings contribute
//! nothing.

pub mod accessories;
pub mod key;
pub mod materials;
pub mod pipes;

pub use accessories::{AccessoryEntry, accessories, minor_loss_k, sum_minor_losses};
pub use key::normalize_key;
pub use materials::{DEFAULT_ROUGHNESS_M, MaterialEntry, materials, roughness, roughness_m};
pub use pipes::{PipeSizeEntry, pipe_diameter, schedules, tabulated_diameter_m};
