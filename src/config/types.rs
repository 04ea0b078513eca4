//! Configuration types and their defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub flow: FlowConfig,
}

/// Where the shop and profile services live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL shared by both services (e.g., "https://game.example/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Path of the purchase endpoint, relative to `base_url`.
    #[serde(default = "default_purchase_path")]
    pub purchase_path: String,
    /// Path of the current-user endpoint, relative to `base_url`.
    #[serde(default = "default_profile_path")]
    pub profile_path: String,
}

/// Policy knobs for the reveal flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Extra profile fetches after the first one fails (default: 1).
    #[serde(default = "default_profile_max_retries")]
    pub profile_max_retries: u32,
    /// Pause between the purchase resolving and the reveal (default: 200).
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds as u64)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds as u64)
    }

    /// Full URL of an endpoint path.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl FlowConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_purchase_path() -> String {
    "/shops".to_string()
}

fn default_profile_path() -> String {
    "/users".to_string()
}

fn default_profile_max_retries() -> u32 {
    1
}

fn default_reveal_delay_ms() -> u64 {
    200
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            purchase_path: default_purchase_path(),
            profile_path: default_profile_path(),
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            profile_max_retries: default_profile_max_retries(),
            reveal_delay_ms: default_reveal_delay_ms(),
        }
    }
}
