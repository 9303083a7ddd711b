//! API configuration from environment variables
//!
//! Resolved once when the client is constructed; the selection is immutable
//! for the process lifetime.

use std::time::Duration;

/// Default base URL for the development backend (Android emulator loopback)
const DEV_BASE_URL: &str = "http://10.0.2.2:3001";

/// Default base URL for the production backend
const PROD_BASE_URL: &str = "https://cuidarecife-api.onrender.com";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which backend the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEnv {
    Development,
    Production,
}

impl ApiEnv {
    /// Parse the environment selector; anything unrecognized is production.
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("development") => ApiEnv::Development,
            _ => ApiEnv::Production,
        }
    }
}

/// Backend connection configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Selected environment
    pub env: ApiEnv,
    /// Base URL all endpoint paths are appended to (no trailing slash)
    pub base_url: String,
    /// Timeout applied to every request by the HTTP client
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None, None, None, None)
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// - `CUIDAR_API_ENV`: `development` or `production` (default `production`)
    /// - `CUIDAR_API_URL_DEV`: development base URL override
    /// - `CUIDAR_API_URL_PROD`: production base URL override
    /// - `CUIDAR_REQUEST_TIMEOUT_SECS`: per-request timeout (default 10)
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var("CUIDAR_API_ENV").ok(),
            std::env::var("CUIDAR_API_URL_DEV").ok(),
            std::env::var("CUIDAR_API_URL_PROD").ok(),
            std::env::var("CUIDAR_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        )
    }

    fn resolve(
        env_selector: Option<String>,
        dev_url: Option<String>,
        prod_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        let env = ApiEnv::parse(env_selector.as_deref());
        let base_url = match env {
            ApiEnv::Development => dev_url.unwrap_or_else(|| DEV_BASE_URL.to_string()),
            ApiEnv::Production => prod_url.unwrap_or_else(|| PROD_BASE_URL.to_string()),
        };

        Self {
            env,
            base_url,
            request_timeout: Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        }
    }
}
