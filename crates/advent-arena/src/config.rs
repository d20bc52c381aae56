//! Connection settings for the Are.na API.

use std::time::Duration;

/// Environment variable overriding the API base URL.
pub const ARENA_API_URL_ENV: &str = "ARENA_API_URL";

/// Public Are.na v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.are.na/v2";

/// HTTP client configuration for [`ArenaClient`](crate::ArenaClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaConfig {
    /// API root; `/channels/{slug}/contents` is appended to it.
    pub base_url: String,

    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Transport timeout per request. A timed out request is a page failure.
    pub timeout: Option<Duration>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("advent-doors/{}", env!("CARGO_PKG_VERSION")),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ArenaConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config, taking the base URL from `ARENA_API_URL` if set.
    pub fn from_env() -> Self {
        match std::env::var(ARENA_API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url),
            _ => Self::default(),
        }
    }

    /// Sets the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the User-Agent header.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Sets the per-request timeout; `None` leaves it to the transport.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArenaConfig::default();

        assert_eq!(config.base_url, "https://api.are.na/v2");
        assert!(config.user_agent.starts_with("advent-doors/"));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_config_builder() {
        let config = ArenaConfig::new()
            .with_base_url("http://localhost:9000")
            .with_user_agent("test")
            .with_timeout(None);

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.user_agent, "test");
        assert_eq!(config.timeout, None);
    }
}
