use serde::Serialize;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire (camelCase) name of the offending field.
    pub field: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Validation failed on one or more fields. `message` is the summary
    /// shown to the user, `fields` lists every failure.
    #[error("Validation failed: {message}")]
    InvalidFields {
        message: String,
        fields: Vec<FieldError>,
    },

    #[error("Conflict: {0}")]
    Conflict(String),
}
