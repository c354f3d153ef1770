/// Default origin of the separately deployed student intake app.
pub const DEFAULT_STUDENTFORM_ORIGIN: &str = "https://medici-landing-student.vercel.app";

/// Default College Scorecard API base (without the `/v1` suffix).
pub const DEFAULT_SCORECARD_URL: &str = "https://api.data.gov/ed/collegescorecard";

/// Runtime settings for the site server, read once at startup.
///
/// Every field except the database URL (read separately in `main`) has a
/// local-development default.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for in-flight requests on shutdown (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Maximum pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// Origin the studentform paths are proxied to.
    pub studentform_origin: String,
    /// Largest request body forwarded to the studentform origin.
    pub proxy_max_body_bytes: usize,
    /// College Scorecard API key. University search fails without it.
    pub scorecard_api_key: Option<String>,
    /// College Scorecard API base URL.
    pub scorecard_url: String,
    /// Public site URL used in canonical and social-card links.
    pub site_url: String,
    /// Directory holding static assets and `pages/<slug>.html` fragments.
    pub static_dir: String,
    /// Google Analytics measurement id for the page shell.
    pub analytics_id: Option<String>,
    /// Attempts for the newsletter sign-up transaction (default: `3`).
    pub subscribe_max_attempts: u32,
}

impl ServerConfig {
    /// Read settings from the process environment.
    ///
    /// | Env Var                     | Default                                     |
    /// |-----------------------------|---------------------------------------------|
    /// | `HOST`                      | `0.0.0.0`                                   |
    /// | `PORT`                      | `3000`                                      |
    /// | `CORS_ORIGINS`              | `http://localhost:3000`                     |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                                        |
    /// | `SHUTDOWN_TIMEOUT_SECS`     | `30`                                        |
    /// | `DB_MAX_CONNECTIONS`        | `10`                                        |
    /// | `STUDENTFORM_ORIGIN`        | `https://medici-landing-student.vercel.app` |
    /// | `PROXY_MAX_BODY_BYTES`      | `2097152`                                   |
    /// | `COLLEGE_SCORECARD_API_KEY` | unset                                       |
    /// | `COLLEGE_SCORECARD_URL`     | `https://api.data.gov/ed/collegescorecard`  |
    /// | `SITE_URL`                  | `https://medici.ac`                         |
    /// | `STATIC_DIR`                | `public`                                    |
    /// | `GA_MEASUREMENT_ID`         | unset                                       |
    /// | `SUBSCRIBE_MAX_ATTEMPTS`    | `3`                                         |
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");
        let port: u16 = parse_env("PORT", "3000");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", "30"),
            shutdown_timeout_secs: parse_env("SHUTDOWN_TIMEOUT_SECS", "30"),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", "10"),
            studentform_origin: env_or("STUDENTFORM_ORIGIN", DEFAULT_STUDENTFORM_ORIGIN),
            proxy_max_body_bytes: parse_env("PROXY_MAX_BODY_BYTES", "2097152"),
            scorecard_api_key: optional_env("COLLEGE_SCORECARD_API_KEY"),
            scorecard_url: env_or("COLLEGE_SCORECARD_URL", DEFAULT_SCORECARD_URL),
            site_url: env_or("SITE_URL", "https://medici.ac"),
            static_dir: env_or("STATIC_DIR", "public"),
            analytics_id: optional_env("GA_MEASUREMENT_ID"),
            subscribe_max_attempts: parse_env("SUBSCRIBE_MAX_ATTEMPTS", "3"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an env var, panicking at startup on malformed values.
fn parse_env<T>(key: &str, default: &str) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_or(key, default)
        .parse()
        .unwrap_or_else(|e| panic!("{key} must be a valid {}: {e}", std::any::type_name::<T>()))
}
