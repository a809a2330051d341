//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PAIRWISE_ENGINE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use pairwise_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init_tracing().expect("Failed to install subscriber");
//!
//! println!("Solver at {}", config.solver.base_url);
//! ```

mod error;
mod logging;
mod solver;
mod suggest;

pub use error::{ConfigError, LoggingError, ValidationError};
pub use logging::LoggingConfig;
pub use solver::SolverConfig;
pub use suggest::SuggestConfig;

use serde::Deserialize;

use crate::domain::suggest::AutoSuggest;

/// Root engine configuration
///
/// Every section has defaults, so an empty environment loads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Weight solver endpoint
    #[serde(default)]
    pub solver: SolverConfig,

    /// Auto-suggest price thresholds
    #[serde(default)]
    pub suggest: SuggestConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAIRWISE_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PAIRWISE_ENGINE__SOLVER__BASE_URL=http://solver:8000` -> `solver.base_url`
    /// - `PAIRWISE_ENGINE__SUGGEST__NEAR_EQUAL_THRESHOLD=500000` -> `suggest.near_equal_threshold`
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
                    .prefix("PAIRWISE_ENGINE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first section that is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.solver.validate()?;
        self.suggest.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Heuristic configured with this engine's price thresholds
    pub fn auto_suggest(&self) -> AutoSuggest {
        AutoSuggest::new(self.suggest.damping())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "PAIRWISE_ENGINE__SOLVER__BASE_URL",
        "PAIRWISE_ENGINE__SOLVER__TIMEOUT_SECS",
        "PAIRWISE_ENGINE__SOLVER__API_KEY",
        "PAIRWISE_ENGINE__SUGGEST__NEAR_EQUAL_THRESHOLD",
        "PAIRWISE_ENGINE__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = EngineConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.solver.endpoint, "/process-comparisons");
        assert_eq!(config.suggest, SuggestConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PAIRWISE_ENGINE__SOLVER__BASE_URL", "https://solver.example.com");
        env::set_var("PAIRWISE_ENGINE__SOLVER__TIMEOUT_SECS", "5");
        env::set_var("PAIRWISE_ENGINE__SOLVER__API_KEY", "sk-solver");
        env::set_var("PAIRWISE_ENGINE__LOGGING__JSON", "true");
        let result = EngineConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.solver.base_url, "https://solver.example.com");
        assert_eq!(config.solver.timeout_secs, 5);
        assert!(config.solver.api_key.is_some());
        assert!(config.logging.json);
    }

    #[test]
    fn test_invalid_thresholds_fail_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PAIRWISE_ENGINE__SUGGEST__NEAR_EQUAL_THRESHOLD", "9000000");
        let result = EngineConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidThresholds))
        ));
    }

    #[test]
    fn test_auto_suggest_uses_configured_damping() {
        let config = EngineConfig::default();
        assert_eq!(config.auto_suggest(), AutoSuggest::default());
    }
}
