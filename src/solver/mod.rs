//! Interface to the external schedule solver service.
//!
//! The combinatorial search and ranking live behind a single HTTP endpoint;
//! this module only constructs requests and interprets transport results.
//! The trait abstraction keeps the wizard testable against scripted
//! in-process solvers.

use async_trait::async_trait;

use crate::api::{ScheduleRequest, SolverResponse};

#[cfg(feature = "http-client")]
pub mod config;
#[cfg(feature = "http-client")]
pub mod http;

#[cfg(feature = "http-client")]
pub use config::SolverConfig;
#[cfg(feature = "http-client")]
pub use http::HttpSolverClient;

/// Transport-level failures talking to the solver. All variants are the
/// same retryable failure class from the wizard's point of view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    /// The request never completed (connection refused, timeout, ...).
    #[error("solver request failed: {0}")]
    Transport(String),
    /// The solver answered with a non-success HTTP status.
    #[error("solver returned status {0}")]
    Status(u16),
    /// The body was not a decodable solver response.
    #[error("solver response could not be decoded: {0}")]
    Decode(String),
}

/// A client able to submit a generation request to the solver.
///
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait SolverClient: Send + Sync {
    /// Submit a request and return the raw response.
    async fn submit(&self, request: &ScheduleRequest) -> Result<SolverResponse, SolverError>;
}
