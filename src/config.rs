//! Configuration for webkv
//!
//! Centralized client configuration with sensible defaults.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::{Result, WebKvError};

/// Default gateway address (webdis listens on 7379)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7379";

/// Default per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Maximum number of attempts for a request that keeps timing out
pub const MAX_TRIES: u32 = 5;

/// Main configuration for a webkv client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    // -------------------------------------------------------------------------
    // Endpoint Configuration
    // -------------------------------------------------------------------------
    /// Gateway base URL, `scheme://host:port`, no trailing slash
    pub base_url: String,

    /// Headers sent with every request (per-call headers win on conflict)
    pub default_headers: BTreeMap<String, String>,

    // -------------------------------------------------------------------------
    // Timeout / Retry Configuration
    // -------------------------------------------------------------------------
    /// Per-request timeout (milliseconds)
    pub timeout_ms: u64,

    /// Total attempts allowed when requests time out
    pub max_tries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_headers: BTreeMap::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_tries: MAX_TRIES,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check the config before a client is built from it
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.as_str();
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .ok_or_else(|| {
                WebKvError::Config(format!("base url must start with http:// or https://: {url:?}"))
            })?;
        if rest.is_empty() || rest.contains('/') {
            return Err(WebKvError::Config(format!(
                "base url must be scheme://host[:port] with no path: {url:?}"
            )));
        }
        if self.timeout_ms == 0 {
            return Err(WebKvError::Config("timeout must be non-zero".to_string()));
        }
        if self.max_tries == 0 {
            return Err(WebKvError::Config("max_tries must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Builder for ClientConfig
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the gateway base URL (a trailing slash is dropped)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.config.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout (in milliseconds)
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Set the total number of attempts on timeout
    pub fn max_tries(mut self, tries: u32) -> Self {
        self.config.max_tries = tries;
        self
    }

    /// Add a header sent with every request
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
