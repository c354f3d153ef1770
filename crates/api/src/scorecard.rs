//! Client for the College Scorecard school search.
//!
//! Wraps `GET /v1/schools` using [`reqwest`] and reduces each result to the
//! fields the university picker shows.

use serde::{Deserialize, Serialize};

/// Maximum results requested per search.
pub const PAGE_SIZE: u32 = 10;

const FIELDS: &str = "id,school.name,school.city,school.state";

/// HTTP client for the College Scorecard API.
pub struct ScorecardClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// A university match returned to the front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    /// `"<name> - <city>, <state>"`, omitting missing location parts.
    pub full_name: String,
}

/// Raw search response. Field names are the dotted API field paths.
#[derive(Debug, Deserialize)]
struct SchoolsResponse {
    #[serde(default)]
    results: Vec<SchoolResult>,
}

#[derive(Debug, Deserialize)]
struct SchoolResult {
    id: i64,
    #[serde(rename = "school.name")]
    name: Option<String>,
    #[serde(rename = "school.city")]
    city: Option<String>,
    #[serde(rename = "school.state")]
    state: Option<String>,
}

/// Errors from the College Scorecard API layer.
#[derive(Debug, thiserror::Error)]
pub enum ScorecardError {
    /// No API key is configured.
    #[error("COLLEGE_SCORECARD_API_KEY is not configured")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("College Scorecard API error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

impl ScorecardClient {
    /// Create a client reusing an existing [`reqwest::Client`].
    ///
    /// * `base_url` - API base without the version, e.g.
    ///   `https://api.data.gov/ed/collegescorecard`.
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Search schools whose name matches `query`.
    pub async fn search(&self, query: &str) -> Result<Vec<University>, ScorecardError> {
        let api_key = self.api_key.as_deref().ok_or(ScorecardError::MissingApiKey)?;
        let per_page = PAGE_SIZE.to_string();

        let response = self
            .client
            .get(format!(
                "{}/v1/schools",
                self.base_url.trim_end_matches('/')
            ))
            .query(&[
                ("api_key", api_key),
                ("school.name", query),
                ("fields", FIELDS),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScorecardError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SchoolsResponse = response.json().await?;
        Ok(parsed.results.into_iter().filter_map(to_university).collect())
    }
}

/// Results without a name are useless to the picker and are skipped.
fn to_university(result: SchoolResult) -> Option<University> {
    let name = result.name.filter(|n| !n.trim().is_empty())?;
    let location: Vec<&str> = [result.city.as_deref(), result.state.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect();

    let full_name = if location.is_empty() {
        name.clone()
    } else {
        format!("{name} - {}", location.join(", "))
    };

    Some(University {
        id: result.id,
        name,
        city: result.city,
        state: result.state,
        full_name,
    })
}
