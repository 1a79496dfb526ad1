//! Small normalisation helpers for free-text request fields.

use crate::error::CoreError;

/// Trim an optional string, mapping `None` to the empty string.
pub fn clean(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Trim an optional string, mapping blank input to `None`.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Fail with a single [`CoreError::Validation`] naming every blank field.
///
/// `fields` pairs the wire name of each required field with its raw value.
pub fn require_fields(fields: &[(&'static str, Option<&str>)]) -> Result<(), CoreError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| non_blank(*value).is_none())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Overwrite `target` with the trimmed `value` when one was supplied.
pub fn merge_text(target: &mut String, value: Option<String>) {
    if let Some(v) = value {
        *target = v.trim().to_string();
    }
}

/// Validate a replacement value for a required field in a partial update.
///
/// Absent stays absent; present-but-blank is rejected.
pub fn replace_required(
    name: &'static str,
    value: Option<String>,
) -> Result<Option<String>, CoreError> {
    match value {
        None => Ok(None),
        Some(v) => match non_blank(Some(&v)) {
            Some(trimmed) => Ok(Some(trimmed)),
            None => Err(CoreError::Validation(format!("{name} must not be empty"))),
        },
    }
}
