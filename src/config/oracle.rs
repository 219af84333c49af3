//! Oracle configuration - language-model backend settings.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Language-model oracle configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleConfig {
    /// API key for the oracle backend.
    pub api_key: Option<String>,

    /// Model to consult.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the messages API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures.
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

impl OracleConfig {
    /// Get timeout as Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate oracle configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_retries() -> u32 {
    3
}
