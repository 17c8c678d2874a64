//! Case loading and validation.

use std::path::Path;

use pf_project::CaseDef;

use crate::error::{AppError, AppResult};

/// Load a case from a YAML file. The case is not validated here.
pub fn load_case(path: &Path) -> AppResult<CaseDef> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::CaseFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let case: CaseDef = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Case(format!("Failed to parse case YAML: {}", e)))?;

    Ok(case)
}

/// Check a case against the input rules, reporting every violation.
pub fn validate_case(case: &CaseDef) -> AppResult<()> {
    pf_project::validate_case(case).map_err(|errs| AppError::Validation(errs.to_string()))
}
