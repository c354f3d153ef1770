//! Route definitions for the marketing pages.

use axum::routing::get;
use axum::Router;
use medici_core::site::PAGES;

use crate::handlers::pages;
use crate::state::AppState;

/// One GET route per registered marketing page, at the site root.
pub fn router() -> Router<AppState> {
    PAGES.iter().fold(Router::new(), |router, page| {
        router.route(page.path, get(pages::render))
    })
}
