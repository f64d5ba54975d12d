use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    entities::CompanyPayload,
    errors::ValidationError,
};

use super::shape_mapper::normalize;

/// Checks an import file and turns it into a create payload. Only the
/// `Company` object and its common name are required; everything else is
/// defaulted.
pub(crate) fn validate_import(raw: &str) -> Result<CompanyPayload, ServerError> {
    let root: Value = serde_json::from_str(raw)
        .map_err(|e| ValidationError::with_debug("import file is not valid JSON", &e))?;
    let company = root
        .get("Company")
        .filter(|c| c.is_object())
        .ok_or_else(|| ValidationError::new("import file has no 'Company' object"))?;
    match company.get("Company Common Name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => {}
        _ => {
            return Err(ValidationError::new(
                "import file has no 'Company Common Name'",
            ))
        }
    }
    Ok(CompanyPayload {
        data: normalize(&root),
    })
}

/// The only hard precondition on a submitted form.
pub(crate) fn validate_common_name(name: &str) -> Result<(), ServerError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("company name is required"));
    }
    Ok(())
}
