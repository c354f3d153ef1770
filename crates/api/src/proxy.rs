//! Reverse proxy to the separately deployed studentform app.
//!
//! Buffers the request and response bodies (both are small HTML/JSON/asset
//! payloads) and forwards end-to-end headers unchanged.

use axum::body::{Body, Bytes};
use axum::extract::Request;
use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::response::Response;
use medici_core::studentform::upstream_url;

use crate::error::AppError;

/// Headers that describe a single connection and must not be forwarded.
const HOP_BY_HOP: &[HeaderName] = &[
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Errors from forwarding a request upstream.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The request body exceeded the configured limit.
    #[error("Request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// The request body could not be read.
    #[error("Failed to read request body: {0}")]
    ReadBody(String),

    /// The upstream could not be reached or returned an unreadable response.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The upstream response could not be converted.
    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),
}

impl From<ProxyError> for AppError {
    fn from(err: ProxyError) -> Self {
        match err {
            ProxyError::BodyTooLarge { .. } => AppError::Upstream {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                message: err.to_string(),
            },
            ProxyError::ReadBody(msg) => AppError::BadRequest(msg),
            ProxyError::Upstream(_) | ProxyError::InvalidResponse(_) => {
                tracing::error!(error = %err, "Studentform proxy failed");
                AppError::Upstream {
                    status: StatusCode::BAD_GATEWAY,
                    message: "The student application is temporarily unavailable".to_string(),
                }
            }
        }
    }
}

/// HTTP client for the studentform origin.
pub struct StudentformProxy {
    client: reqwest::Client,
    origin: String,
    max_body_bytes: usize,
}

impl StudentformProxy {
    /// Create a proxy reusing an existing [`reqwest::Client`].
    ///
    /// * `origin` - Scheme and host, e.g. `https://form.example.com`.
    pub fn with_client(client: reqwest::Client, origin: String, max_body_bytes: usize) -> Self {
        Self {
            client,
            origin,
            max_body_bytes,
        }
    }

    /// Forward `req` to `upstream_path` on the origin, keeping its query.
    ///
    /// When `base_path` is set it is returned to the browser in the
    /// `x-base-path` response header.
    pub async fn forward(
        &self,
        req: Request,
        upstream_path: &str,
        base_path: Option<&'static str>,
    ) -> Result<Response, ProxyError> {
        let (parts, body) = req.into_parts();

        let declared_len = parts
            .headers
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<usize>().ok());
        if declared_len.is_some_and(|len| len > self.max_body_bytes) {
            return Err(ProxyError::BodyTooLarge {
                limit: self.max_body_bytes,
            });
        }

        let body: Bytes = axum::body::to_bytes(body, self.max_body_bytes)
            .await
            .map_err(|e| ProxyError::ReadBody(e.to_string()))?;

        let url = upstream_url(&self.origin, upstream_path, parts.uri.query());
        let mut headers = forwardable_headers(&parts.headers);
        if let Some(host) = parts.headers.get(header::HOST) {
            headers.insert(HeaderName::from_static("x-forwarded-host"), host.clone());
        }

        tracing::debug!(method = %parts.method, %url, "Proxying to studentform");

        let upstream = self
            .client
            .request(parts.method, &url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = upstream.status();
        let mut response_headers = forwardable_headers(upstream.headers());
        response_headers.remove(header::CONTENT_LENGTH);
        let bytes = upstream.bytes().await?;

        let mut response = Response::builder()
            .status(status)
            .body(Body::from(bytes))
            .map_err(|e| ProxyError::InvalidResponse(e.to_string()))?;
        response.headers_mut().extend(response_headers);
        if let Some(base_path) = base_path {
            response.headers_mut().insert(
                HeaderName::from_static(medici_core::studentform::BASE_PATH_HEADER),
                HeaderValue::from_static(base_path),
            );
        }

        Ok(response)
    }
}

/// Copy `headers` without hop-by-hop headers, `Host` and `Content-Length`
/// (both are recomputed for the new connection).
fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if HOP_BY_HOP.contains(name)
            || name == header::HOST
            || name == header::CONTENT_LENGTH
            || name.as_str() == "keep-alive"
        {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}
