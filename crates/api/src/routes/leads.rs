//! Route definitions for the lead-capture forms.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{donors, student_profile, students, subscribers};
use crate::state::AppState;

/// Lead routes, mounted under `/api`.
///
/// ```text
/// GET    /donors               -> list
/// POST   /donors               -> create
/// GET    /students             -> list
/// POST   /students             -> create
/// POST   /student-profile      -> create
/// POST   /subscribers          -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/donors", get(donors::list).post(donors::create))
        .route("/students", get(students::list).post(students::create))
        .route("/student-profile", post(student_profile::create))
        .route("/subscribers", post(subscribers::create))
}
