//! Field rules for operator accounts.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Maximum length of a display name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Emails are compared trimmed and lower-cased everywhere (login, uniqueness).
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validate an already-normalised email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.to_string().validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid email address '{email}'")))
    }
}

/// Validate a display name: non-blank and within [`MAX_NAME_LENGTH`].
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("nome must not be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "nome exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}
