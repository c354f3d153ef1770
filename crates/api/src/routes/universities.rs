//! Route definitions for the university lookup.

use axum::routing::get;
use axum::Router;

use crate::handlers::universities;
use crate::state::AppState;

/// Routes mounted at `/api/universities`.
///
/// ```text
/// GET    /search?query=        -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(universities::search))
}
