use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL used when neither the config file nor the environment sets one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct RootConfig {
    #[serde(default)]
    pub client: ClientConfig,
}

/// HTTP client settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every API path, e.g. `https://loom.example.com/api`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Per-request timeout. Unset means requests may wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: None,
        }
    }
}
