//! Straight pipe segment geometry and minor-loss budget.

use crate::common::{check_finite, circular_area};
use crate::error::{HydraulicsError, HydraulicsResult};

/// One straight pipe segment between two energy-balance points.
///
/// All lengths are in the active unit system's length unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSegment {
    length: f64,
    diameter: f64,
    roughness: f64,
    area: f64,
}

impl PipeSegment {
    /// Create a pipe segment.
    ///
    /// `length` must be > 0, `roughness` >= 0, and the cross-sectional area
    /// derived from `diameter` must be > 0.
    pub fn new(length: f64, diameter: f64, roughness: f64) -> HydraulicsResult<Self> {
        check_finite(length, "length")?;
        check_finite(diameter, "diameter")?;
        check_finite(roughness, "roughness")?;
        if length.is_nan() || length <= 0.0 {
            return Err(HydraulicsError::InvalidGeometry {
                what: "length",
                value: length,
            });
        }
        if roughness.is_nan() || roughness < 0.0 {
            return Err(HydraulicsError::InvalidGeometry {
                what: "roughness",
                value: roughness,
            });
        }
        let area = circular_area(diameter);
        if area.is_nan() || area <= 0.0 || diameter <= 0.0 {
            return Err(HydraulicsError::NonPositiveArea { diameter, area });
        }
        Ok(Self {
            length,
            diameter,
            roughness,
            area,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn roughness(&self) -> f64 {
        self.roughness
    }

    /// Cross-sectional area `πD²/4`.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Relative roughness `ε/D`.
    pub fn relative_roughness(&self) -> f64 {
        self.roughness / self.diameter
    }
}

/// Sum of accessory loss coefficients (ΣK), weighted by occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MinorLossBudget(f64);

impl MinorLossBudget {
    pub fn new(sum_k: f64) -> Self {
        Self(sum_k)
    }

    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Accumulate `K * count` over `(K, count)` pairs.
    pub fn from_counts<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (f64, u32)>,
    {
        Self(items.into_iter().map(|(k, n)| k * n as f64).sum())
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for MinorLossBudget {
    fn from(v: f64) -> Self {
        Self(v)
    }
}
