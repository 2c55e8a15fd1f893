//! Mock status source with simulated fetch latency

use crate::core::{Pipeline, PipelineStatus, Step, StepStatus};
use crate::source::{PipelineSource, SourceConfig, SourceError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Source that returns a fixed pipeline collection after a configurable delay
///
/// The data is deterministic and identical on every fetch, which makes the
/// viewer's behavior reproducible in tests and demos. The delay stands in
/// for the latency of the real status API.
#[derive(Debug, Clone)]
pub struct MockStatusSource {
    delay: Duration,
}

impl MockStatusSource {
    /// Create a mock source from a config
    pub fn new(config: SourceConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.delay_ms),
        }
    }

    /// Override the simulated fetch latency
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The fixed pipeline collection this source serves
    pub fn fixture() -> Vec<Pipeline> {
        vec![
            Pipeline {
                id: "pipeline-1".to_string(),
                name: "Data Processing Pipeline".to_string(),
                status: PipelineStatus::Running,
                steps: vec![
                    Step {
                        id: "step-1".to_string(),
                        name: "Data Ingestion".to_string(),
                        status: StepStatus::Completed,
                    },
                    Step {
                        id: "step-2".to_string(),
                        name: "Data Validation".to_string(),
                        status: StepStatus::Running,
                    },
                    Step {
                        id: "step-3".to_string(),
                        name: "Data Processing".to_string(),
                        status: StepStatus::Pending,
                    },
                ],
            },
            Pipeline {
                id: "pipeline-2".to_string(),
                name: "ML Training Pipeline".to_string(),
                status: PipelineStatus::Idle,
                steps: vec![
                    Step {
                        id: "step-4".to_string(),
                        name: "Model Training".to_string(),
                        status: StepStatus::Pending,
                    },
                    Step {
                        id: "step-5".to_string(),
                        name: "Model Evaluation".to_string(),
                        status: StepStatus::Pending,
                    },
                ],
            },
        ]
    }
}

impl Default for MockStatusSource {
    fn default() -> Self {
        Self::new(SourceConfig::default())
    }
}

#[async_trait]
impl PipelineSource for MockStatusSource {
    async fn fetch_pipelines(&self) -> Result<Vec<Pipeline>, SourceError> {
        debug!("[MockStatusSource] Simulating fetch with {:?} delay", self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(Self::fixture())
    }
}
