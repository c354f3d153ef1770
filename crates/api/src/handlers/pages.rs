//! Server-rendered marketing pages.

use std::path::Path;

use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use medici_core::site::{find_page, render_document, ShellOptions};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET for every path in [`medici_core::site::PAGES`].
///
/// Wraps `pages/<slug>.html` from the static directory in the page's
/// metadata shell.
pub async fn render(State(state): State<AppState>, uri: Uri) -> AppResult<Html<String>> {
    let page = find_page(uri.path()).ok_or_else(|| AppError::NotFound(uri.path().to_string()))?;
    let body = load_fragment(&state.config.static_dir, page.slug).await;

    let opts = ShellOptions {
        site_url: &state.config.site_url,
        analytics_id: state.config.analytics_id.as_deref(),
    };
    let html = render_document(page, &body, &opts).map_err(|e| {
        tracing::error!(slug = page.slug, error = %e, "Page template failed");
        AppError::InternalError(format!("Failed to render {}", page.path))
    })?;
    Ok(Html(html))
}

/// Read a page body fragment. A missing fragment renders as an empty page
/// so the metadata shell is still served.
async fn load_fragment(static_dir: &str, slug: &str) -> String {
    let path = Path::new(static_dir)
        .join("pages")
        .join(format!("{slug}.html"));

    match tokio::fs::read_to_string(&path).await {
        Ok(body) => body,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Page fragment missing");
            String::new()
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Failed to read page fragment");
            String::new()
        }
    }
}
