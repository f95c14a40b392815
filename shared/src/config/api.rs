//! API endpoint configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

const BASE_URL_VAR: &str = "BONDIHUB_API_BASE_URL";
const BASE_URL_HINT: &str =
    "Create a .env file with: BONDIHUB_API_BASE_URL=http://localhost:8080/api/v1";

/// HTTP client configuration
///
/// The base URL is the single required piece of configuration; a missing
/// value is a hard startup failure. Everything else has fixed defaults
/// matching the deployed applications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL including the `/api/v1` prefix
    pub base_url: String,

    /// Per-request wall-clock timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// Create a configuration with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_secs: default_timeout_secs(),
        }
    }

    /// Load the configuration from environment variables
    ///
    /// Reads a `.env` file if present, then requires `BONDIHUB_API_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var(BASE_URL_VAR).map_err(|_| ConfigError::MissingVariable {
            name: BASE_URL_VAR,
            hint: BASE_URL_HINT,
        })?;

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                name: BASE_URL_VAR,
                reason: format!("expected an http(s) URL, got {:?}", base_url),
            });
        }

        let request_timeout_secs = std::env::var("BONDIHUB_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_secs);

        Ok(Self {
            base_url,
            request_timeout_secs,
        })
    }

    /// Base URL with any trailing slash removed
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn default_timeout_secs() -> u64 {
    30
}
