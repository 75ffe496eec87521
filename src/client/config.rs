//! Client configuration

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Default capacity of each per-kind broadcast channel
pub const DEFAULT_BROADCAST_CAPACITY: usize = 64;

/// Default TCP connect timeout for the subscription endpoint
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Push client configuration options
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root URL of the service (the subscription path is appended to it)
    pub root_url: String,

    /// Ambient request headers attached to the connection at open time
    /// (session/auth headers supplied by the hosting request context)
    pub headers: HeaderMap,

    /// Capacity of each per-kind broadcast channel
    pub broadcast_capacity: usize,

    /// Connect timeout (only the TCP connect; the stream itself never times out)
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            root_url: String::new(),
            headers: HeaderMap::new(),
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a new config for the given service root URL
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            ..Default::default()
        }
    }

    /// Attach a single ambient header
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Replace the ambient headers wholesale
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Set the per-kind broadcast channel capacity
    pub fn broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity.max(1);
        self
    }

    /// Set the connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();

        assert!(config.root_url.is_empty());
        assert!(config.headers.is_empty());
        assert_eq!(config.broadcast_capacity, DEFAULT_BROADCAST_CAPACITY);
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
    }

    #[test]
    fn test_new_sets_root_url() {
        let config = ClientConfig::new("https://demo.example.org/api");

        assert_eq!(config.root_url, "https://demo.example.org/api");
    }

    #[test]
    fn test_builder_header() {
        let config = ClientConfig::new("https://demo.example.org/api").header(
            HeaderName::from_static("session-token"),
            HeaderValue::from_static("abc123"),
        );

        assert_eq!(config.headers.len(), 1);
        assert_eq!(config.headers["session-token"], "abc123");
    }

    #[test]
    fn test_builder_capacity_floor() {
        // Zero-capacity broadcast channels are not allowed
        let config = ClientConfig::default().broadcast_capacity(0);

        assert_eq!(config.broadcast_capacity, 1);
    }

    #[test]
    fn test_builder_chaining() {
        let config = ClientConfig::new("http://localhost:8888/api")
            .broadcast_capacity(128)
            .connect_timeout(Duration::from_secs(5));

        assert_eq!(config.root_url, "http://localhost:8888/api");
        assert_eq!(config.broadcast_capacity, 128);
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }
}
