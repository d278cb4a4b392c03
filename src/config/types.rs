use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Settings for the MyCargonaut REST backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint is joined onto (e.g., "http://localhost:8080/api").
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Retry attempts for transport failures on idempotent requests (default: 0).
    #[serde(default)]
    pub max_retries: u32,
    /// Base backoff in milliseconds for retry (default: 100).
    #[serde(default = "default_retry_backoff_base_ms")]
    pub retry_backoff_base_ms: u64,
}

/// Settings for the address lookup service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of a Nominatim-compatible service.
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// Queries shorter than this are answered without a request.
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
    /// User-Agent sent with every lookup; Nominatim rejects anonymous clients.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Where the signed-in session is kept between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Override for the session file. Defaults to the platform data dir.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of stars a rating is drawn with.
    #[serde(default = "default_max_stars")]
    pub max_stars: u32,
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_retry_backoff_base_ms() -> u64 {
    100
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_min_query_chars() -> usize {
    3
}

fn default_user_agent() -> String {
    concat!("cargonaut/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_max_stars() -> u32 {
    crate::rating::DEFAULT_MAX_STARS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            max_retries: 0,
            retry_backoff_base_ms: default_retry_backoff_base_ms(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            min_query_chars: default_min_query_chars(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_stars: default_max_stars(),
        }
    }
}
