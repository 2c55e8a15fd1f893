mod cli;
mod core;
mod source;
mod view;

use anyhow::{Context, Result};
use cli::commands::ShowCommand;
use cli::output::*;
use cli::{Cli, Command};
use source::{MockStatusSource, SourceConfig};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;
use view::{StatusViewer, ViewState};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Show(cmd) => show_status(cmd).await?,
        Command::Legend => print!("{}", render_legend()),
    }

    Ok(())
}

async fn show_status(cmd: &ShowCommand) -> Result<()> {
    // Mock source for now - TODO: add the status API client behind PipelineSource
    let config = SourceConfig::default().with_delay_ms(cmd.delay_ms);
    let source = MockStatusSource::new(config);
    let mut viewer = StatusViewer::new(source);

    viewer.begin_load();
    let spinner = create_loading_spinner();
    viewer.finish_load().await;
    spinner.finish_and_clear();

    if cmd.json {
        if let Some(pipelines) = viewer.pipelines() {
            let json = serde_json::to_string_pretty(pipelines)
                .context("Failed to serialize pipelines")?;
            println!("{}", json);
        }
    } else {
        print!("{}", render_view(viewer.state()));
    }

    if let ViewState::Failed { error } = viewer.state() {
        error!("Pipeline status load failed: {}", error);
        std::process::exit(1);
    }

    Ok(())
}
