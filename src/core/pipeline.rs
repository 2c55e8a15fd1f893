//! Pipeline domain model

use crate::core::status::{PipelineStatus, StepStatus};
use serde::{Deserialize, Serialize};

/// A pipeline as reported by the status source
///
/// Pipelines are created by a load and never mutated afterwards; a fresh
/// load replaces the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Unique pipeline identifier
    pub id: String,

    /// Human-readable pipeline name
    pub name: String,

    /// Overall pipeline status
    pub status: PipelineStatus,

    /// Steps in execution order
    pub steps: Vec<Step>,
}

/// A single step of a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Step identifier, unique within its pipeline
    pub id: String,

    /// Human-readable step name
    pub name: String,

    /// Step status
    pub status: StepStatus,
}

impl Pipeline {
    /// Get a step by ID
    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Number of steps that completed successfully
    pub fn completed_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Completed)
            .count()
    }

    /// Number of steps in a terminal state (completed or failed)
    pub fn finished_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.status.is_terminal()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pipeline() -> Pipeline {
        Pipeline {
            id: "build-7".to_string(),
            name: "Nightly Build".to_string(),
            status: PipelineStatus::Running,
            steps: vec![
                Step {
                    id: "checkout".to_string(),
                    name: "Checkout".to_string(),
                    status: StepStatus::Completed,
                },
                Step {
                    id: "compile".to_string(),
                    name: "Compile".to_string(),
                    status: StepStatus::Failed,
                },
                Step {
                    id: "publish".to_string(),
                    name: "Publish".to_string(),
                    status: StepStatus::Pending,
                },
            ],
        }
    }

    #[test]
    fn test_step_lookup() {
        let pipeline = sample_pipeline();
        assert_eq!(pipeline.step("compile").unwrap().name, "Compile");
        assert!(pipeline.step("deploy").is_none());
    }

    #[test]
    fn test_step_counts() {
        let pipeline = sample_pipeline();
        assert_eq!(pipeline.completed_steps(), 1);
        assert_eq!(pipeline.finished_steps(), 2);
    }

    #[test]
    fn test_pipeline_json_round_trip() {
        let pipeline = sample_pipeline();
        let json = serde_json::to_string(&pipeline).unwrap();
        let back: Pipeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pipeline);
    }

    #[test]
    fn test_pipeline_deserializes_unknown_status() {
        let json = r#"{
            "id": "p1",
            "name": "P1",
            "status": "hibernating",
            "steps": []
        }"#;
        let pipeline: Pipeline = serde_json::from_str(json).unwrap();
        assert_eq!(
            pipeline.status,
            PipelineStatus::Other("hibernating".to_string())
        );
    }
}
