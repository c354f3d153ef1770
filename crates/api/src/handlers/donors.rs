//! Handlers for the `/donors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use medici_core::leads::DonorSubmission;
use medici_db::models::donor::{CreateDonor, Donor};
use medici_db::repositories::DonorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

pub const MSG_DUPLICATE: &str = "This email is already registered.";

/// POST /api/donors
pub async fn create(
    State(state): State<AppState>,
    AppJson(submission): AppJson<DonorSubmission>,
) -> AppResult<(StatusCode, Json<Donor>)> {
    let input = CreateDonor::from(submission.validate()?);

    let donor = DonorRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::conflict_on_duplicate(e, MSG_DUPLICATE))?;

    tracing::info!(donor_id = donor.id, "Donor signed up");
    Ok((StatusCode::CREATED, Json(donor)))
}

/// GET /api/donors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Donor>>> {
    let donors = DonorRepo::list(&state.pool).await?;
    Ok(Json(donors))
}
