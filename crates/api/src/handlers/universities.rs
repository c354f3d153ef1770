//! University name lookup backed by College Scorecard.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::scorecard::University;
use crate::state::AppState;

pub const MSG_QUERY_REQUIRED: &str = "Query parameter is required";
pub const MSG_LOOKUP_FAILED: &str = "Failed to fetch universities";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// GET /api/universities/search?query=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<University>>> {
    let query = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest(MSG_QUERY_REQUIRED.to_string()))?;

    let universities = state.scorecard.search(query).await.map_err(|err| {
        tracing::error!(error = %err, "University lookup failed");
        AppError::Upstream {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: MSG_LOOKUP_FAILED.to_string(),
        }
    })?;

    Ok(Json(universities))
}
