//! Case validation. Every rule runs; all violations are reported together.

use crate::schema::{CASE_VERSION, CaseDef, FlowInputDef, SolveFor};
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing value: {field} ({reason})")]
    Missing { field: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

impl ValidationError {
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidValue { field, .. } | ValidationError::Missing { field, .. } => {
                Some(field)
            }
            ValidationError::UnsupportedVersion { .. } => None,
        }
    }
}

/// Non-empty list of violations.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == Some(field))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate_case(case: &CaseDef) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if case.version > CASE_VERSION {
        errors.push(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    at_least(&mut errors, "fluid.density", case.fluid.density, 0.01);
    at_least(&mut errors, "fluid.viscosity", case.fluid.viscosity, 0.0);
    at_least(&mut errors, "pipe.length", case.pipe.length, 0.01);
    at_least(&mut errors, "pipe.nominal", case.pipe.nominal, 0.001);
    if case.pipe.schedule < 10 {
        errors.push(invalid(
            "pipe.schedule",
            case.pipe.schedule,
            "must be at least 10",
        ));
    }

    let eta = case.pump_efficiency;
    if !(eta.is_finite() && (0.01..=1.0).contains(&eta)) {
        errors.push(invalid(
            "pump_efficiency",
            eta,
            "must be between 0.01 and 1.0",
        ));
    }

    for (i, acc) in case.accessories.iter().enumerate() {
        if acc.count < 0 || acc.count > i64::from(u32::MAX) {
            errors.push(invalid(
                &format!("accessories[{i}].count"),
                acc.count,
                "must be a non-negative count",
            ));
        }
    }

    if case.solve_for == SolveFor::HeadLoss {
        match case.flow {
            None => errors.push(ValidationError::Missing {
                field: "flow".to_string(),
                reason: "a velocity or flow rate is required to compute head loss".to_string(),
            }),
            Some(input) => {
                let (field, v) = match input {
                    FlowInputDef::Velocity(v) => ("flow.velocity", v),
                    FlowInputDef::FlowRate(q) => ("flow.flow_rate", q),
                };
                if v.is_nan() || v <= 0.0 || v.is_infinite() {
                    errors.push(invalid(field, v, "must be positive"));
                }
            }
        }
    }

    let b = &case.boundary;
    for (field, v) in [
        ("boundary.p1", b.p1),
        ("boundary.p2", b.p2),
        ("boundary.z1", b.z1),
        ("boundary.z2", b.z2),
    ] {
        if !v.is_finite() {
            errors.push(invalid(field, v, "must be finite"));
        }
    }

    if let Some(search) = case.search {
        let ok = search.v_min.is_finite()
            && search.v_max.is_finite()
            && search.v_min > 0.0
            && search.v_min < search.v_max;
        if !ok {
            errors.push(invalid(
                "search",
                format!("[{}, {}]", search.v_min, search.v_max),
                "need 0 < v_min < v_max",
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn at_least(errors: &mut Vec<ValidationError>, field: &str, value: f64, min: f64) {
    if !value.is_finite() || value < min {
        errors.push(invalid(field, value, &format!("must be at least {min}")));
    }
}
