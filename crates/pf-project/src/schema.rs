//! Case schema definitions.

use pf_core::UnitSystem;
use serde::{Deserialize, Serialize};

pub const CASE_VERSION: u32 = 1;

/// One pipe-flow calculation: fluid, pipe, fittings and what to solve for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub system: UnitSystem,
    pub fluid: FluidDef,
    pub pipe: PipeDef,
    #[serde(default)]
    pub accessories: Vec<AccessoryDef>,
    pub pump_efficiency: f64,
    #[serde(default)]
    pub solve_for: SolveFor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<FlowInputDef>,
    #[serde(default)]
    pub boundary: BoundaryDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchDef>,
}

/// Density and dynamic viscosity in the case's unit system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    pub density: f64,
    pub viscosity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipeDef {
    pub length: f64,
    /// Nominal size in inches, or an internal diameter in the active length
    /// unit when the size is not tabulated.
    pub nominal: f64,
    #[serde(default = "default_schedule")]
    pub schedule: u32,
    #[serde(default)]
    pub material: String,
}

fn default_schedule() -> u32 {
    40
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessoryDef {
    pub name: String,
    #[serde(default = "default_count")]
    pub count: i64,
}

fn default_count() -> i64 {
    1
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SolveFor {
    /// Head loss, pressure drop and power from a known flow.
    #[default]
    HeadLoss,
    /// Velocity and flow rate from the energy boundary.
    Velocity,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FlowInputDef {
    Velocity(f64),
    FlowRate(f64),
}

impl FlowInputDef {
    pub fn value(&self) -> f64 {
        match self {
            FlowInputDef::Velocity(v) | FlowInputDef::FlowRate(v) => *v,
        }
    }
}

/// Pressures and elevations at the two ends; missing values are zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct BoundaryDef {
    #[serde(default)]
    pub p1: f64,
    #[serde(default)]
    pub p2: f64,
    #[serde(default)]
    pub z1: f64,
    #[serde(default)]
    pub z2: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SearchDef {
    pub v_min: f64,
    pub v_max: f64,
}
