//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Solver URL must start with http:// or https://")]
    InvalidSolverUrl,

    #[error("Solver endpoint must start with '/'")]
    InvalidEndpoint,

    #[error("Invalid solver timeout")]
    InvalidTimeout,

    #[error("Price thresholds must be non-negative and strictly ascending")]
    InvalidThresholds,

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}

/// Errors from installing the tracing subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("A global subscriber is already installed")]
    AlreadyInstalled,
}
