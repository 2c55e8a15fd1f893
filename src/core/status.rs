//! Status labels for pipelines and steps

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall status of a pipeline
///
/// Statuses arrive from the source as plain strings. Labels outside the
/// known set are preserved in `Other` rather than rejected, so an unknown
/// value never fails deserialization or render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PipelineStatus {
    /// Pipeline exists but nothing is running
    Idle,
    /// Pipeline is currently running
    Running,
    /// Pipeline completed successfully
    Completed,
    /// Pipeline failed
    Failed,
    /// Unrecognized status label, kept verbatim
    Other(String),
}

/// Status of a single step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StepStatus {
    /// Step has not started yet
    Pending,
    /// Step is currently running
    Running,
    /// Step completed successfully
    Completed,
    /// Step failed
    Failed,
    /// Unrecognized status label, kept verbatim
    Other(String),
}

impl PipelineStatus {
    /// The wire label for this status
    pub fn as_str(&self) -> &str {
        match self {
            PipelineStatus::Idle => "idle",
            PipelineStatus::Running => "running",
            PipelineStatus::Completed => "completed",
            PipelineStatus::Failed => "failed",
            PipelineStatus::Other(label) => label,
        }
    }
}

impl StepStatus {
    /// The wire label for this status
    pub fn as_str(&self) -> &str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::Running => "running",
            StepStatus::Completed => "completed",
            StepStatus::Failed => "failed",
            StepStatus::Other(label) => label,
        }
    }

    /// Check if the step reached a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepStatus::Completed | StepStatus::Failed)
    }
}

impl From<String> for PipelineStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "idle" => PipelineStatus::Idle,
            "running" => PipelineStatus::Running,
            "completed" => PipelineStatus::Completed,
            "failed" => PipelineStatus::Failed,
            _ => PipelineStatus::Other(label),
        }
    }
}

impl From<&str> for PipelineStatus {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<PipelineStatus> for String {
    fn from(status: PipelineStatus) -> Self {
        status.as_str().to_string()
    }
}

impl From<String> for StepStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "pending" => StepStatus::Pending,
            "running" => StepStatus::Running,
            "completed" => StepStatus::Completed,
            "failed" => StepStatus::Failed,
            _ => StepStatus::Other(label),
        }
    }
}

impl From<&str> for StepStatus {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<StepStatus> for String {
    fn from(status: StepStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
