//! Shared response envelope types for API handlers.

use medici_core::types::DbId;
use serde::Serialize;

/// Success envelope for form submissions: `{ "success": true, "message": ... }`.
///
/// Error responses carry `"success": false` (see [`crate::error::AppError`]),
/// so front-end code can branch on a single field.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

impl SubmissionResponse {
    pub fn ok(message: &'static str) -> Self {
        Self {
            success: true,
            message,
            id: None,
        }
    }

    pub fn created(message: &'static str, id: DbId) -> Self {
        Self {
            success: true,
            message,
            id: Some(id),
        }
    }
}
