//! pipeview - a terminal status viewer for CI/CD pipelines

pub mod cli;
pub mod core;
pub mod source;
pub mod view;

// Re-export commonly used types
pub use core::{Pipeline, PipelineStatus, Step, StepStatus};
pub use source::{MockStatusSource, PipelineSource, SourceConfig, SourceError};
pub use view::{StatusViewer, ViewState};
