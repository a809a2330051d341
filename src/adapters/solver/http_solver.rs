//! HTTP Weight Solver - Implementation of WeightSolver over JSON/HTTP.
//!
//! Posts the comparison payload to the solver service and decodes its
//! verdict. One attempt per call; timeouts and connection failures come
//! back as `SolverError` so the pipeline can treat them like any other
//! failure.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpSolverConfig::new("http://localhost:8000")
//!     .with_endpoint("/process-comparisons")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let solver = HttpWeightSolver::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::SolverConfig;
use crate::ports::{SolverError, SolverRequest, SolverResponse, WeightSolver};

/// Configuration for the HTTP solver.
#[derive(Debug, Clone)]
pub struct HttpSolverConfig {
    /// Service root, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Path of the comparison endpoint.
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Optional bearer token.
    api_key: Option<Secret<String>>,
}

impl HttpSolverConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: "/process-comparisons".to_string(),
            timeout: Duration::from_secs(30),
            api_key: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    /// Full URL of the comparison endpoint.
    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

impl From<&SolverConfig> for HttpSolverConfig {
    fn from(config: &SolverConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            endpoint: config.endpoint.clone(),
            timeout: config.timeout(),
            api_key: config.api_key.clone(),
        }
    }
}

/// Weight solver reached over HTTP.
pub struct HttpWeightSolver {
    config: HttpSolverConfig,
    client: Client,
}

impl HttpWeightSolver {
    /// Creates a solver client.
    ///
    /// # Errors
    ///
    /// `Network` if the HTTP client cannot be built.
    pub fn new(config: HttpSolverConfig) -> Result<Self, SolverError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SolverError::network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    async fn send(&self, request: &SolverRequest) -> Result<Response, SolverError> {
        let mut builder = self.client.post(self.config.url()).json(request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }
        builder.send().await.map_err(|e| {
            if e.is_timeout() {
                SolverError::timeout(self.config.timeout.as_secs())
            } else if e.is_connect() {
                SolverError::network(format!("Connection failed: {}", e))
            } else {
                SolverError::network(e.to_string())
            }
        })
    }

    /// Maps the HTTP response onto a verdict.
    ///
    /// Non-2xx bodies shaped like `{status: "error", message}` are the
    /// solver's own verdict; anything else is a transport failure.
    async fn handle_response(&self, response: Response) -> Result<SolverResponse, SolverError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<SolverResponse>()
                .await
                .map_err(|e| SolverError::parse(format!("Failed to parse response: {}", e)));
        }

        let body = response.text().await.unwrap_or_default();
        if let Ok(verdict @ SolverResponse::Error { .. }) =
            serde_json::from_str::<SolverResponse>(&body)
        {
            warn!(status = status.as_u16(), "Solver returned an error verdict");
            return Ok(verdict);
        }

        match status.as_u16() {
            400..=499 => Err(SolverError::rejected(status.as_u16(), body)),
            500..=599 => Err(SolverError::unavailable(format!(
                "Server error {}: {}",
                status, body
            ))),
            _ => Err(SolverError::network(format!(
                "Unexpected status {}: {}",
                status, body
            ))),
        }
    }
}

#[async_trait]
impl WeightSolver for HttpWeightSolver {
    async fn solve(&self, request: SolverRequest) -> Result<SolverResponse, SolverError> {
        debug!(
            url = %self.config.url(),
            comparisons = request.comparisons.len(),
            "Posting comparisons to solver"
        );
        let response = self.send(&request).await?;
        self.handle_response(response).await
    }
}
