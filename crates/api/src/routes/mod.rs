pub mod health;
pub mod leads;
pub mod pages;
pub mod universities;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /donors                        list, create
/// /students                      list, create
/// /student-profile               create (intake wizard)
/// /subscribers                   create (newsletter)
/// /universities/search           College Scorecard lookup
/// ```
///
/// Unmatched `/api/**` paths fall through to the router fallback, which
/// proxies them to the studentform deployment.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(leads::router())
        .nest("/universities", universities::router())
}
