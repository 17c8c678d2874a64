//! Two-point energy balance and flow state.

/// Available specific energy `Δ = (P1−P2)/(ρg) + (z1−z2)`.
///
/// Positive means energy is available to drive flow against losses.
pub fn available_head(p1: f64, p2: f64, z1: f64, z2: f64, density: f64, gravity: f64) -> f64 {
    (p1 - p2) / (density * gravity) + (z1 - z2)
}

/// Pressure and elevation at the two ends of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyBoundary {
    pub p1: f64,
    pub p2: f64,
    pub z1: f64,
    pub z2: f64,
}

impl EnergyBoundary {
    pub fn new(p1: f64, p2: f64, z1: f64, z2: f64) -> Self {
        Self { p1, p2, z1, z2 }
    }

    /// Boundary driven by pressure alone (`z1 = z2 = 0`).
    pub fn pressure_only(p1: f64, p2: f64) -> Self {
        Self::new(p1, p2, 0.0, 0.0)
    }

    pub fn available_head(&self, density: f64, gravity: f64) -> f64 {
        available_head(self.p1, self.p2, self.z1, self.z2, density, gravity)
    }
}

/// Velocity and volumetric flow rate, always consistent with `Q = V·A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    velocity: f64,
    flow_rate: f64,
}

impl FlowState {
    pub fn from_velocity(velocity: f64, area: f64) -> Self {
        Self {
            velocity,
            flow_rate: velocity * area,
        }
    }

    /// `V = Q/A`; a non-positive area yields `V = 0`.
    pub fn from_flow_rate(flow_rate: f64, area: f64) -> Self {
        let velocity = if area > 0.0 { flow_rate / area } else { 0.0 };
        Self {
            velocity,
            flow_rate: velocity * area,
        }
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn flow_rate(&self) -> f64 {
        self.flow_rate
    }
}
