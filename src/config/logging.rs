//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::{LoggingError, ValidationError};

/// Tracing output settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `pairwise_engine=debug`
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Installs the global tracing subscriber.
    ///
    /// `RUST_LOG` wins over the configured level when it is set.
    ///
    /// # Errors
    ///
    /// `LoggingError::AlreadyInstalled` if a subscriber is already set.
    pub fn init_tracing(&self) -> Result<(), LoggingError> {
        let filter =
            EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&self.level))?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false);

        let installed = if self.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        installed.map_err(|_| LoggingError::AlreadyInstalled)
    }

    /// Validate the filter directive
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| ValidationError::InvalidLogLevel(e.to_string()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
