use crate::types::RecordId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: RecordId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] built from any id-like value.
    pub fn not_found(entity: &'static str, id: impl Into<RecordId>) -> Self {
        CoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
