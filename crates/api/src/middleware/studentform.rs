//! Edge rewrite/redirect for the studentform deployment.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use medici_core::studentform::{route, RouteDecision, MOUNT_PREFIX};

use crate::error::AppError;
use crate::state::AppState;

/// Runs before routing. Proxies `/studentform/**`, redirects the legacy
/// notify/success paths, and lets everything else through.
pub async fn route_studentform(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match route(req.uri().path()) {
        RouteDecision::PassThrough => next.run(req).await,
        RouteDecision::Redirect { location } => {
            tracing::debug!(from = %req.uri().path(), to = location, "Redirecting into studentform");
            Redirect::temporary(location).into_response()
        }
        RouteDecision::Rewrite { upstream_path } => {
            match state
                .studentform
                .forward(req, &upstream_path, Some(MOUNT_PREFIX))
                .await
            {
                Ok(response) => response,
                Err(err) => AppError::from(err).into_response(),
            }
        }
    }
}
