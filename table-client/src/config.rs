//! Client configuration
//!
//! # Environment variables
//!
//! | variable | default | meaning |
//! |----------|---------|---------|
//! | POS_API_URL | http://localhost:8080 | POS API base URL |
//! | POS_API_KEY | (none) | sent as a bearer token |
//! | POS_REQUEST_TIMEOUT_SECS | (none) | per-request timeout |

use crate::{ClientResult, HttpClient};

/// Client configuration for connecting to the POS API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// API key, sent as `Authorization: Bearer <key>`
    pub token: Option<String>,

    /// Request timeout in seconds. `None` leaves timing to the server.
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        let mut config = std::env::var("POS_API_URL")
            .map(Self::new)
            .unwrap_or_default();
        config.token = std::env::var("POS_API_KEY").ok().filter(|k| !k.is_empty());
        config.timeout = std::env::var("POS_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok());
        config
    }

    /// Set the API key
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<HttpClient> {
        HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
