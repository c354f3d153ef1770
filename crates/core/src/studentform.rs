//! Path routing rules for the external studentform deployment.
//!
//! The intake wizard is served by a separate deployment. Requests under
//! `/studentform` are proxied to it with the prefix removed, and a few legacy
//! marketing paths redirect into it. Everything else is served locally.

/// Prefix under which the studentform deployment is mounted.
pub const MOUNT_PREFIX: &str = "/studentform";

/// Response header telling the proxied app where it is mounted.
pub const BASE_PATH_HEADER: &str = "x-base-path";

/// What the edge middleware should do with a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Serve locally.
    PassThrough,
    /// Reverse-proxy to the studentform origin at `upstream_path`.
    Rewrite { upstream_path: String },
    /// Redirect the browser to `location` (a local path).
    Redirect { location: &'static str },
}

/// Decide how to handle `path` before routing.
pub fn route(path: &str) -> RouteDecision {
    if path.starts_with("/api/") {
        return RouteDecision::PassThrough;
    }

    if let Some(upstream_path) = strip_mount(path) {
        return RouteDecision::Rewrite { upstream_path };
    }

    match path {
        "/notify" => RouteDecision::Redirect {
            location: "/studentform/notify",
        },
        "/success" | "/notify/success" => RouteDecision::Redirect {
            location: "/studentform/notify/success",
        },
        _ => RouteDecision::PassThrough,
    }
}

/// Strip [`MOUNT_PREFIX`] from `path`. Only the exact prefix or the prefix
/// followed by `/` match; the remainder is never empty.
fn strip_mount(path: &str) -> Option<String> {
    let rest = path.strip_prefix(MOUNT_PREFIX)?;
    match rest {
        "" => Some("/".to_string()),
        _ if rest.starts_with('/') => Some(rest.to_string()),
        _ => None,
    }
}

/// Whether an otherwise unmatched path should be proxied to the studentform
/// origin unchanged (its build assets and API routes).
pub fn is_fallback_path(path: &str) -> bool {
    path.starts_with("/_next/") || path.starts_with("/api/")
}

/// Join an origin (`https://host[:port]`) with a path and optional query.
pub fn upstream_url(origin: &str, path: &str, query: Option<&str>) -> String {
    let origin = origin.trim_end_matches('/');
    match query {
        Some(q) if !q.is_empty() => format!("{origin}{path}?{q}"),
        _ => format!("{origin}{path}"),
    }
}
