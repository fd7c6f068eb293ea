//! Reqwest-backed solver client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::config::SolverConfig;
use super::{SolverClient, SolverError};
use crate::api::{ScheduleRequest, SolverResponse};

/// HTTP client for the solver's generation endpoint.
pub struct HttpSolverClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSolverClient {
    /// Build a client from configuration.
    pub fn new(config: &SolverConfig) -> Result<Self, SolverError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SolverError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl SolverClient for HttpSolverClient {
    async fn submit(&self, request: &ScheduleRequest) -> Result<SolverResponse, SolverError> {
        debug!(endpoint = %self.endpoint, courses = request.courses.len(), "submitting solver request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| SolverError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SolverError::Status(status.as_u16()));
        }

        response
            .json::<SolverResponse>()
            .await
            .map_err(|e| SolverError::Decode(e.to_string()))
    }
}
