//! Router fallback: static files, then the studentform fallback rewrites.

use std::path::Path;

use axum::extract::{OriginalUri, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use medici_core::studentform::is_fallback_path;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::error::AppError;
use crate::state::AppState;

/// Handles every request no route matched.
///
/// Static files win. Otherwise `/_next/**` and unknown `/api/**` paths are
/// proxied unchanged to the studentform origin, and anything else is a JSON
/// 404.
pub async fn handle(
    State(state): State<AppState>,
    OriginalUri(original): OriginalUri,
    mut req: Request,
) -> Response {
    // Nested routers strip their prefix from `req.uri()`.
    *req.uri_mut() = original;
    let path = req.uri().path().to_string();
    let static_dir = &state.config.static_dir;

    if !is_fallback_path(&path) || is_static_file(static_dir, &path).await {
        return serve_static(static_dir, req).await;
    }

    match state.studentform.forward(req, &path, None).await {
        Ok(response) => response,
        Err(err) => AppError::from(err).into_response(),
    }
}

/// Whether `path` names a regular file inside `static_dir`.
async fn is_static_file(static_dir: &str, path: &str) -> bool {
    let relative = path.trim_start_matches('/');
    if relative.split('/').any(|segment| segment == "..") {
        return false;
    }
    tokio::fs::metadata(Path::new(static_dir).join(relative))
        .await
        .is_ok_and(|meta| meta.is_file())
}

async fn serve_static(static_dir: &str, req: Request) -> Response {
    let path = req.uri().path().to_string();
    let response = match ServeDir::new(static_dir).oneshot(req).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    if response.status() == StatusCode::NOT_FOUND {
        return AppError::NotFound(path).into_response();
    }
    response.into_response()
}
