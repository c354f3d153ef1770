use std::sync::Arc;

use crate::config::ServerConfig;
use crate::proxy::StudentformProxy;
use crate::scorecard::ScorecardClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: medici_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Reverse proxy to the studentform deployment.
    pub studentform: Arc<StudentformProxy>,
    /// College Scorecard client for university search.
    pub scorecard: Arc<ScorecardClient>,
}

impl AppState {
    /// Build state from a pool and config, sharing one HTTP client between
    /// the upstream integrations.
    pub fn new(pool: medici_db::DbPool, config: ServerConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to build HTTP client");

        let studentform = StudentformProxy::with_client(
            http.clone(),
            config.studentform_origin.clone(),
            config.proxy_max_body_bytes,
        );
        let scorecard = ScorecardClient::with_client(
            http,
            config.scorecard_url.clone(),
            config.scorecard_api_key.clone(),
        );

        Self {
            pool,
            config: Arc::new(config),
            studentform: Arc::new(studentform),
            scorecard: Arc::new(scorecard),
        }
    }
}
