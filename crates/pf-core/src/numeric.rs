use crate::PfError;

/// Floating point type used throughout system
pub type Real = f64;

/// Residual returned for trial points outside the physical domain.
///
/// Root searches see this as "very far from a root" and never evaluate the
/// physical formula there. This is the velocity residual's plateau; the
/// Colebrook residual uses its own smaller one
/// (`pf_hydraulics::friction::F_DOMAIN_SENTINEL`, 1e6), which stays well
/// above any `1/√f` magnitude in the friction bracket.
pub const DOMAIN_SENTINEL: Real = 1e10;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PfError::NonFinite { what, value: v })
    }
}

/// Relative difference `|a - b| / |b|`, falling back to the absolute
/// difference when `b` is zero.
pub fn relative_error(a: Real, b: Real) -> Real {
    if b == 0.0 {
        (a - b).abs()
    } else {
        ((a - b) / b).abs()
    }
}
