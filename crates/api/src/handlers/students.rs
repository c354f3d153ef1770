//! Handlers for the `/students` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use medici_core::leads::StudentSubmission;
use medici_db::models::student::{CreateStudent, Student};
use medici_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

pub const MSG_DUPLICATE: &str = "An application with this email already exists.";

/// POST /api/students
pub async fn create(
    State(state): State<AppState>,
    AppJson(submission): AppJson<StudentSubmission>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let input = CreateStudent::from(submission.validate()?);

    let student = StudentRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::conflict_on_duplicate(e, MSG_DUPLICATE))?;

    tracing::info!(student_id = student.id, "Student interest recorded");
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/students
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(students))
}
