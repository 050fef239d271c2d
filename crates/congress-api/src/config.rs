//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::retry::RetryConfig;

/// Public Congress.gov v3 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.congress.gov/v3";
/// Items returned when the caller does not ask for a limit.
pub const DEFAULT_LIMIT: u32 = 20;
/// Largest page the upstream will serve, and the largest limit accepted.
pub const MAX_LIMIT: u32 = 250;
/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Sub-resource fetches allowed in flight during enrichment.
pub const DEFAULT_ENRICH_CONCURRENCY: usize = 8;

/// Everything an [`ApiClient`](crate::ApiClient) needs to talk to Congress.gov.
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub default_limit: u32,
    pub max_limit: u32,
    pub timeout: Duration,
    pub retry: RetryConfig,
    pub enrich_concurrency: usize,
}

impl ClientConfig {
    /// Defaults against the public endpoint with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
            timeout: DEFAULT_TIMEOUT,
            retry: RetryConfig::default(),
            enrich_concurrency: DEFAULT_ENRICH_CONCURRENCY,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration for transient errors (429, 5xx, network).
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_enrich_concurrency(mut self, concurrency: usize) -> Self {
        self.enrich_concurrency = concurrency;
        self
    }

    pub fn with_limits(mut self, default_limit: u32, max_limit: u32) -> Self {
        self.default_limit = default_limit;
        self.max_limit = max_limit;
        self
    }
}

// The key never appears in logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("default_limit", &self.default_limit)
            .field("max_limit", &self.max_limit)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("enrich_concurrency", &self.enrich_concurrency)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_public_defaults() {
        let config = ClientConfig::new("key");
        assert_eq!(config.base_url, "https://api.congress.gov/v3");
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.max_limit, 250);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.enrich_concurrency, 8);
    }

    #[test]
    fn debug_redacts_key() {
        let config = ClientConfig::new("super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
