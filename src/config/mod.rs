//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `PATTERN_SHERPA` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use pattern_sherpa::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod data;
mod engine;
mod error;
mod oracle;

pub use data::DataConfig;
pub use engine::{EngineConfig, RunMode};
pub use error::{ConfigError, ValidationError};
pub use oracle::OracleConfig;

// Settings enums shared with the domain layer.
pub use crate::domain::analysis::{QualityWeightsMode, SolverStrategy};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Engine settings (weight mode, run mode, solver)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Oracle settings (API key, model, timeout)
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Input file locations
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `PATTERN_SHERPA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PATTERN_SHERPA__ENGINE__RUN_MODE=direct` -> `engine.run_mode`
    /// - `PATTERN_SHERPA__ORACLE__API_KEY=...` -> `oracle.api_key`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PATTERN_SHERPA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid, or
    /// if the full pipeline is selected without an oracle API key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.oracle.validate()?;

        if self.engine.run_mode == RunMode::FullPipeline && !self.oracle.has_api_key() {
            return Err(ValidationError::MissingRequired(
                "PATTERN_SHERPA__ORACLE__API_KEY",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("PATTERN_SHERPA__ORACLE__API_KEY");
        env::remove_var("PATTERN_SHERPA__ORACLE__TIMEOUT_SECS");
        env::remove_var("PATTERN_SHERPA__ENGINE__RUN_MODE");
        env::remove_var("PATTERN_SHERPA__DATA__MATRIX_PATH");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.engine.run_mode, RunMode::FullPipeline);
        assert!(config.oracle.api_key.is_none());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PATTERN_SHERPA__ORACLE__API_KEY", "sk-ant-xxx");
        env::set_var("PATTERN_SHERPA__ORACLE__TIMEOUT_SECS", "30");
        env::set_var("PATTERN_SHERPA__ENGINE__RUN_MODE", "direct");
        env::set_var("PATTERN_SHERPA__DATA__MATRIX_PATH", "matrix.yaml");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.oracle.api_key.as_deref(), Some("sk-ant-xxx"));
        assert_eq!(config.oracle.timeout_secs, 30);
        assert_eq!(config.engine.run_mode, RunMode::Direct);
        assert_eq!(config.data.matrix_path.as_deref(), Some("matrix.yaml"));
    }

    #[test]
    fn test_full_pipeline_requires_api_key() {
        let config = AppConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_direct_mode_validates_without_api_key() {
        let config = AppConfig {
            engine: EngineConfig {
                run_mode: RunMode::Direct,
                provided_weights: HashMap::from([("Performance".to_string(), 100)]),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
