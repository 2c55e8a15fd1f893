//! Pipeline status sources
//!
//! A source is anything that can produce the current pipeline collection.
//! The only implementation in this version is the fixed-delay mock; the
//! trait is the seam for the real pipeline-status API client.

pub mod mock;

use crate::core::Pipeline;
use async_trait::async_trait;
use thiserror::Error;

pub use mock::MockStatusSource;

/// Trait for pipeline status sources - allows for different implementations
#[async_trait]
pub trait PipelineSource: Send + Sync {
    /// Fetch the current pipeline collection
    async fn fetch_pipelines(&self) -> Result<Vec<Pipeline>, SourceError>;
}

/// Error types for source operations
///
/// The mock source never returns these; they cover the failure modes a real
/// backend introduces (network errors, timeouts, bad payloads).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Malformed payload: {0}")]
    Malformed(String),
}

/// Configuration for a status source
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// API endpoint for the real status source
    ///
    /// Unused by the mock; reserved for the status API client.
    pub endpoint: Option<String>,

    /// Simulated fetch latency in milliseconds (mock only)
    pub delay_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            delay_ms: 1000,
        }
    }
}

impl SourceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}
