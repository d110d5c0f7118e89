//! Runner configuration

use serde::{Deserialize, Serialize};

/// Base URL probed when no other endpoint is supplied at construction.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001";

/// Configuration for a probe run.
///
/// There is deliberately no environment or command-line lookup here:
/// callers that want a different target construct the config themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Base URL of the service under test, without a trailing slash.
    pub base_url: String,
}

impl RunnerConfig {
    /// Creates a config pointing at the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_base_url() {
        let config = RunnerConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8001");
    }

    #[test]
    fn test_custom_base_url() {
        let config = RunnerConfig::new("http://localhost:9000");
        assert_eq!(config.base_url, "http://localhost:9000");
    }
}
