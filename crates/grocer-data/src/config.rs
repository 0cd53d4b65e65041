//! Connection settings for the storefront services.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where the storefront services live and how long to wait for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL all service paths are joined to.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000/api";
    pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ApiConfig =
            serde_json::from_str(r#"{"base_url":"https://shop.example/api"}"#).unwrap();
        assert_eq!(config.base_url, "https://shop.example/api");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }
}
