//! Presentation records: fixed-precision strings paired with unit labels.

use pf_core::UnitSystem;
use pf_hydraulics::{ChartSample, FlowAnalysis};
use serde::Serialize;

/// A formatted value and its unit label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    pub value: String,
    pub unit: &'static str,
}

impl Quantity {
    fn new(value: f64, decimals: usize, unit: &'static str) -> Self {
        Self {
            value: format!("{value:.decimals$}"),
            unit,
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.unit.is_empty() {
            f.write_str(&self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

/// Result of one calculation, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub velocity: Quantity,
    pub flow_rate: Quantity,
    pub head_loss: Quantity,
    pub pressure_drop: Quantity,
    pub power: Quantity,
    pub friction_factor: Quantity,
    pub reynolds: Quantity,
    pub regime: &'static str,
    pub friction_method: &'static str,
}

impl ResultRecord {
    pub fn from_analysis(analysis: &FlowAnalysis, system: UnitSystem) -> Self {
        let labels = system.labels();
        Self {
            velocity: Quantity::new(analysis.flow.velocity(), 3, labels.velocity),
            flow_rate: Quantity::new(analysis.flow.flow_rate(), 4, labels.flow_rate),
            head_loss: Quantity::new(analysis.head_loss.total(), 2, labels.length),
            pressure_drop: Quantity::new(analysis.pressure_drop, 2, labels.pressure),
            power: Quantity::new(analysis.power, 2, labels.power),
            friction_factor: Quantity::new(analysis.friction.f, 4, ""),
            reynolds: Quantity::new(analysis.reynolds, 0, ""),
            regime: analysis.friction.regime.as_str(),
            friction_method: analysis.friction.method.as_str(),
        }
    }
}

/// One `(V, hL)` chart point as display strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub velocity: String,
    pub head_loss: String,
}

/// Head loss versus velocity, labelled for the active unit system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub velocity_unit: &'static str,
    pub head_loss_unit: &'static str,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn from_samples(samples: &[ChartSample], system: UnitSystem) -> Self {
        let labels = system.labels();
        Self {
            velocity_unit: labels.velocity,
            head_loss_unit: labels.length,
            points: samples
                .iter()
                .map(|s| ChartPoint {
                    velocity: format!("{:.2}", s.velocity),
                    head_loss: format!("{:.3}", s.head_loss),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Two-column CSV with a unit-qualified header.
    pub fn to_csv(&self) -> String {
        let mut csv = format!(
            "velocity_{},head_loss_{}\n",
            self.velocity_unit.replace('/', "_per_"),
            self.head_loss_unit
        );
        for p in &self.points {
            csv.push_str(&format!("{},{}\n", p.velocity, p.head_loss));
        }
        csv
    }
}
