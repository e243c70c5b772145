//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

/// Address of the public results site.
pub const DEFAULT_BASE_URL: &str = "https://eboardresults.com";

/// Settings for a [`QueryEngine`](crate::QueryEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scheme and host (optionally a path prefix) all endpoints hang off
    #[serde(default = "default_base_url")]
    pub base_url: Option<String>,

    /// HTTP or SOCKS5 proxy, e.g. `socks5://127.0.0.1:1080`
    #[serde(default)]
    pub proxy: Option<String>,

    /// Local address to bind outgoing connections to
    #[serde(default)]
    pub local_address: Option<IpAddr>,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Worker threads running queries
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
}

impl EngineConfig {
    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            proxy: None,
            local_address: None,
            timeout_secs: default_timeout_secs(),
            worker_threads: default_worker_threads(),
        }
    }
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_worker_threads() -> usize {
    2
}
