//! Handler for newsletter sign-ups.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use medici_core::error::CoreError;
use medici_core::leads::SubscriberSubmission;
use medici_db::repositories::{SubscribeOutcome, SubscriberRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::SubmissionResponse;
use crate::state::AppState;

pub const MSG_SUBSCRIBED: &str = "Successfully subscribed!";
pub const MSG_DUPLICATE: &str = "This email is already subscribed.";

/// POST /api/subscribers
pub async fn create(
    State(state): State<AppState>,
    AppJson(submission): AppJson<SubscriberSubmission>,
) -> AppResult<(StatusCode, Json<SubmissionResponse>)> {
    let email = submission.validate()?;

    match SubscriberRepo::subscribe(&state.pool, &email, state.config.subscribe_max_attempts)
        .await?
    {
        SubscribeOutcome::Created(subscriber) => {
            tracing::info!(subscriber_id = subscriber.id, "Newsletter subscription added");
            Ok((
                StatusCode::CREATED,
                Json(SubmissionResponse::ok(MSG_SUBSCRIBED)),
            ))
        }
        SubscribeOutcome::AlreadySubscribed => {
            Err(CoreError::Conflict(MSG_DUPLICATE.to_string()).into())
        }
    }
}
