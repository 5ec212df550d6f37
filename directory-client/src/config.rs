//! Client configuration

use std::time::Duration;

/// Client configuration for connecting to the directory server
///
/// | Variable | Default |
/// |----------|---------|
/// | API_BASE_URL | http://localhost:3001 |
/// | REQUEST_TIMEOUT_SECS | 30 |
/// | SEARCH_DEBOUNCE_MS | 250 |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3001")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Delay between the last search keystroke and the list request (0 = immediate)
    pub search_debounce_ms: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            search_debounce_ms: 250,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".into()),
        );
        if let Some(timeout) = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = timeout;
        }
        if let Some(debounce) = std::env::var("SEARCH_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.search_debounce_ms = debounce;
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the search debounce
    pub fn with_search_debounce(mut self, millis: u64) -> Self {
        self.search_debounce_ms = millis;
        self
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<super::HttpClient> {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3001")
    }
}
