//! CLI command definitions

use clap::Args;

/// Show the current pipeline status
#[derive(Debug, Args, Clone)]
pub struct ShowCommand {
    /// Simulated fetch latency in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Output the loaded pipelines in JSON format
    #[arg(long)]
    pub json: bool,
}
