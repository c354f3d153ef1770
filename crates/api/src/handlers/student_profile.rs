//! Handler for the multi-step student intake submission.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use medici_core::student_profile::ProfileSubmission;
use medici_db::models::student_profile::CreateStudentProfile;
use medici_db::repositories::StudentProfileRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::SubmissionResponse;
use crate::state::AppState;

pub const MSG_CREATED: &str = "Student profile created successfully";
pub const MSG_DUPLICATE: &str =
    "An account with this email already exists. Please use a different email address.";

/// POST /api/student-profile
///
/// Validates every wizard step, drops blank social links, and stores the
/// profile in `pending` status.
pub async fn create(
    State(state): State<AppState>,
    AppJson(submission): AppJson<ProfileSubmission>,
) -> AppResult<(StatusCode, Json<SubmissionResponse>)> {
    let input = CreateStudentProfile::from(submission.into_lead()?);

    let profile = StudentProfileRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::conflict_on_duplicate(e, MSG_DUPLICATE))?;

    tracing::info!(
        profile_id = profile.id,
        degree_level = profile.degree_level.as_deref().unwrap_or("-"),
        social_links = profile.social_links.0.len(),
        "Student profile submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse::created(MSG_CREATED, profile.id)),
    ))
}
