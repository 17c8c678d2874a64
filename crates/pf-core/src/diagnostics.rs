//! Non-fatal diagnostics.
//!
//! Solvers never emit warnings through a global channel. Whatever they want to
//! tell the caller travels back on the result value, so two concurrent
//! calculations never see each other's notes.

use std::fmt;

/// A single non-fatal note produced while computing a result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// Reynolds number was zero or negative; the friction factor was set to 0.
    InvalidReynolds { reynolds: f64 },
    /// Every Colebrook-White strategy failed; the explicit estimate was used.
    FrictionNotConverged {
        reynolds: f64,
        relative_roughness: f64,
        fallback: f64,
    },
    /// The inverse velocity search found no root.
    VelocityNotConverged { available_head: f64 },
}

impl Diagnostic {
    /// Stable machine-friendly code.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::InvalidReynolds { .. } => "invalid_reynolds",
            Diagnostic::FrictionNotConverged { .. } => "friction_not_converged",
            Diagnostic::VelocityNotConverged { .. } => "velocity_not_converged",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidReynolds { reynolds } => {
                write!(f, "invalid Reynolds number ({reynolds}); friction factor set to 0")
            }
            Diagnostic::FrictionNotConverged {
                reynolds,
                relative_roughness,
                fallback,
            } => write!(
                f,
                "Colebrook-White did not converge (Re={reynolds:.0}, e/D={relative_roughness:.3e}); \
                 using explicit estimate f={fallback:.5}"
            ),
            Diagnostic::VelocityNotConverged { available_head } => write!(
                f,
                "velocity/flow-rate solve did not converge; check whether the available energy \
                 is sufficient (available head {available_head:.4})"
            ),
        }
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, d: Diagnostic) {
        self.0.push(d);
    }

    pub fn extend(&mut self, other: impl IntoIterator<Item = Diagnostic>) {
        self.0.extend(other);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// True if any entry has the given code.
    pub fn contains_code(&self, code: &str) -> bool {
        self.0.iter().any(|d| d.code() == code)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(v: Vec<Diagnostic>) -> Self {
        Self(v)
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
