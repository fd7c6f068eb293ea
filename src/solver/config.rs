//! Solver endpoint configuration from environment variables.

use std::env;

/// Connection settings for the solver service.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Full URL of the generation endpoint
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SolverConfig {
    /// Create a new solver configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `SOLVER_URL` (required): Full URL of the generation endpoint
    /// - `SOLVER_TIMEOUT_SECS` (optional, default: 30): Request timeout
    ///
    /// # Errors
    /// Returns an error if required variables are not set.
    pub fn from_env() -> Result<Self, String> {
        let endpoint = env::var("SOLVER_URL")
            .map_err(|_| "SOLVER_URL environment variable not set".to_string())?;
        let timeout_secs = env::var("SOLVER_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            endpoint,
            timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig {
            endpoint: "http://localhost:9000/generate".to_string(),
            timeout_secs: 30,
        };
        assert_eq!(config.timeout_secs, 30);
    }
}
