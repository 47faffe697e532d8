use std::time::Duration;

/// Where and how to reach the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    host: String,
    timeout: Duration,
}

impl ClientConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(host: impl Into<String>) -> Self {
        let host: String = host.into();
        Self {
            host: host.trim_end_matches('/').to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL without trailing slashes.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.host, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ClientConfig::new("http://localhost:5001//");
        assert_eq!(config.host(), "http://localhost:5001");
        assert_eq!(config.url("inflection"), "http://localhost:5001/inflection");
        assert_eq!(config.timeout(), ClientConfig::DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_timeout_override_keeps_trimmed_host() {
        let config = ClientConfig::new("https://backend.example/").with_timeout(Duration::from_secs(5));
        assert_eq!(config.host(), "https://backend.example");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(
            config.url("syntactical-analysis"),
            "https://backend.example/syntactical-analysis"
        );
    }
}
