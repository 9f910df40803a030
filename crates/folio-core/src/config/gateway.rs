//! API gateway configuration.

use serde::{Deserialize, Serialize};

/// Where the backend gateway lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the gateway, e.g. "http://localhost:9090".
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable consulted before `base_url`.
    #[serde(default = "default_base_url_env")]
    pub base_url_env: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            base_url_env: default_base_url_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GatewayConfig {
    /// Create a config pointing at a fixed base URL, ignoring the environment.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            base_url_env: None,
            ..Self::default()
        }
    }

    /// Resolve the base URL, checking the environment variable first.
    ///
    /// Trailing slashes are stripped so paths can be appended directly.
    pub fn resolve_base_url(&self) -> String {
        if let Some(env_var) = &self.base_url_env
            && let Ok(url) = std::env::var(env_var)
            && !url.trim().is_empty()
        {
            return url.trim().trim_end_matches('/').to_string();
        }
        self.base_url.trim().trim_end_matches('/').to_string()
    }
}

fn default_base_url() -> String {
    "http://localhost:9090".to_string()
}

fn default_base_url_env() -> Option<String> {
    Some("API_GATEWAY_URL".to_string())
}

fn default_timeout_secs() -> u64 {
    30
}
