//! Weight solver configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where and how to reach the weight solver
#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    /// Service root, e.g. `http://localhost:8000`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the comparison endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Bearer token, if the solver wants one
    pub api_key: Option<Secret<String>>,
}

impl SolverConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate solver configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SOLVER__BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidSolverUrl);
        }
        if !self.endpoint.starts_with('/') {
            return Err(ValidationError::InvalidEndpoint);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
            api_key: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_endpoint() -> String {
    "/process-comparisons".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_solver_config_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.endpoint, "/process-comparisons");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_scheme() {
        let config = SolverConfig {
            base_url: "ftp://solver".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSolverUrl));
    }

    #[test]
    fn test_validation_rejects_empty_url() {
        let config = SolverConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_validation_rejects_relative_endpoint() {
        let config = SolverConfig {
            endpoint: "process".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidEndpoint));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = SolverConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_api_key_is_redacted_in_debug() {
        let config = SolverConfig {
            api_key: Some(Secret::new("sk-solver".to_string())),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("sk-solver"));
        assert_eq!(
            config.api_key.as_ref().map(|k| k.expose_secret().as_str()),
            Some("sk-solver")
        );
    }
}
