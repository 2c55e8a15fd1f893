//! CLI output formatting

use crate::core::{Pipeline, Step};
use crate::view::ViewState;
use chrono::{DateTime, Utc};
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

// Re-export style
pub use console::style;

// Emojis for status badges and messages
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CYCLE: Emoji<'_, '_> = Emoji("🔄 ", "> ");
pub static HOURGLASS: Emoji<'_, '_> = Emoji("⏳ ", "~ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static UNKNOWN: Emoji<'_, '_> = Emoji("❓ ", "? ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");

/// Placeholder message shown while the fetch is in flight
pub const LOADING_MESSAGE: &str = "Loading pipelines...";

/// Presentation color for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Green,
    Blue,
    Yellow,
    Red,
    Gray,
}

impl StatusColor {
    /// Apply the color to a piece of text
    pub fn paint(&self, text: &str) -> String {
        match self {
            StatusColor::Green => style(text).green().to_string(),
            StatusColor::Blue => style(text).blue().to_string(),
            StatusColor::Yellow => style(text).yellow().to_string(),
            StatusColor::Red => style(text).red().to_string(),
            StatusColor::Gray => style(text).dim().to_string(),
        }
    }
}

/// Map a status label to its badge color
///
/// Total over all labels: anything outside the known set, including `idle`,
/// gets the neutral gray.
pub fn status_color(label: &str) -> StatusColor {
    match label {
        "completed" => StatusColor::Green,
        "running" => StatusColor::Blue,
        "pending" => StatusColor::Yellow,
        "failed" => StatusColor::Red,
        _ => StatusColor::Gray,
    }
}

/// Map a status label to its badge icon
pub fn status_icon(label: &str) -> Emoji<'static, 'static> {
    match label {
        "completed" => CHECK,
        "running" => CYCLE,
        "pending" => HOURGLASS,
        "failed" => CROSS,
        _ => UNKNOWN,
    }
}

/// Format a status badge: icon plus colored label
pub fn format_badge(label: &str) -> String {
    format!("{}{}", status_icon(label), status_color(label).paint(label))
}

/// Create the spinner shown while the fetch is in flight
pub fn create_loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(LOADING_MESSAGE);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Render the view for the current state
pub fn render_view(state: &ViewState) -> String {
    match state {
        ViewState::Loading => format!("{}\n", LOADING_MESSAGE),
        ViewState::Loaded {
            pipelines,
            loaded_at,
        } => render_pipelines(pipelines, loaded_at),
        ViewState::Failed { error } => format!(
            "{}Failed to load pipelines: {}\n  Run the command again to retry.\n",
            CROSS,
            style(error).red()
        ),
    }
}

/// Render the loaded pipeline collection
pub fn render_pipelines(pipelines: &[Pipeline], loaded_at: &DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n", style("Pipeline Overview").bold(), separator()));

    if pipelines.is_empty() {
        out.push_str(&format!("\n{}No pipelines reported\n", INFO));
    }

    for pipeline in pipelines {
        out.push('\n');
        out.push_str(&format_pipeline(pipeline));
    }

    out.push_str(&format!(
        "\n{}\nLast updated: {}\n",
        separator(),
        style(loaded_at.to_rfc3339()).dim()
    ));
    out
}

/// Format one pipeline with its steps
pub fn format_pipeline(pipeline: &Pipeline) -> String {
    let mut out = format!(
        "{} {} ({}/{} steps complete)\n",
        style(&pipeline.name).bold(),
        format_badge(pipeline.status.as_str()),
        pipeline.completed_steps(),
        pipeline.steps.len(),
    );

    for step in &pipeline.steps {
        out.push_str(&format_step(step));
    }
    out
}

/// Format a single step line: icon, name, colored status label
pub fn format_step(step: &Step) -> String {
    format!(
        "  {}{} {}\n",
        status_icon(step.status.as_str()),
        step.name,
        status_color(step.status.as_str()).paint(step.status.as_str()),
    )
}

/// Render the status badge legend, including the default row
pub fn render_legend() -> String {
    let mut out = format!("{}\n", style("Status legend").bold());
    for label in ["completed", "running", "pending", "failed"] {
        out.push_str(&format!("  {}\n", format_badge(label)));
    }
    out.push_str(&format!(
        "  {}{}\n",
        UNKNOWN,
        StatusColor::Gray.paint("any other status")
    ));
    out
}

/// A horizontal rule sized to the terminal, defaulting to 80 columns
fn separator() -> String {
    let width = term_size::dimensions_stdout()
        .map(|(w, _)| w)
        .unwrap_or(80);
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockStatusSource;

    #[test]
    fn test_status_color_fixed_mappings() {
        assert_eq!(status_color("completed"), StatusColor::Green);
        assert_eq!(status_color("running"), StatusColor::Blue);
        assert_eq!(status_color("pending"), StatusColor::Yellow);
        assert_eq!(status_color("failed"), StatusColor::Red);
    }

    #[test]
    fn test_status_color_defaults_to_gray() {
        assert_eq!(status_color("idle"), StatusColor::Gray);
        assert_eq!(status_color("cancelled"), StatusColor::Gray);
        assert_eq!(status_color(""), StatusColor::Gray);
    }

    #[test]
    fn test_status_icon_fixed_mappings() {
        assert_eq!(status_icon("completed").0, CHECK.0);
        assert_eq!(status_icon("running").0, CYCLE.0);
        assert_eq!(status_icon("pending").0, HOURGLASS.0);
        assert_eq!(status_icon("failed").0, CROSS.0);
    }

    #[test]
    fn test_status_icon_defaults_to_unknown() {
        assert_eq!(status_icon("idle").0, UNKNOWN.0);
        assert_eq!(status_icon("whatever").0, UNKNOWN.0);
    }

    #[test]
    fn test_badge_contains_label() {
        assert!(format_badge("running").contains("running"));
        assert!(format_badge("idle").contains("idle"));
    }

    #[test]
    fn test_loading_render_shows_placeholder_only() {
        let rendered = render_view(&ViewState::Loading);
        assert!(rendered.contains(LOADING_MESSAGE));
        assert!(!rendered.contains("Pipeline Overview"));
        assert!(!rendered.contains("pipeline-1"));
    }

    #[test]
    fn test_loaded_render_lists_pipelines_and_steps_in_order() {
        let state = ViewState::Loaded {
            pipelines: MockStatusSource::fixture(),
            loaded_at: Utc::now(),
        };
        let rendered = render_view(&state);

        assert!(rendered.contains("Pipeline Overview"));
        assert!(rendered.contains("Data Processing Pipeline"));
        assert!(rendered.contains("ML Training Pipeline"));

        // "Data Processing" also prefixes the pipeline name, so the step
        // occurrence is the last one.
        let ingestion = rendered.find("Data Ingestion").unwrap();
        let validation = rendered.find("Data Validation").unwrap();
        let processing_step = rendered.rfind("Data Processing").unwrap();
        assert!(ingestion < validation);
        assert!(validation < processing_step);
    }

    #[test]
    fn test_loaded_render_shows_step_counts() {
        let state = ViewState::Loaded {
            pipelines: MockStatusSource::fixture(),
            loaded_at: Utc::now(),
        };
        let rendered = render_view(&state);
        assert!(rendered.contains("(1/3 steps complete)"));
        assert!(rendered.contains("(0/2 steps complete)"));
    }

    #[test]
    fn test_failed_render_shows_error_and_retry_hint() {
        let state = ViewState::Failed {
            error: "API error: connection refused".to_string(),
        };
        let rendered = render_view(&state);
        assert!(rendered.contains("connection refused"));
        assert!(rendered.contains("retry"));
    }

    #[test]
    fn test_empty_collection_renders_notice() {
        let rendered = render_pipelines(&[], &Utc::now());
        assert!(rendered.contains("No pipelines reported"));
    }

    #[test]
    fn test_legend_covers_known_statuses() {
        let legend = render_legend();
        for label in ["completed", "running", "pending", "failed"] {
            assert!(legend.contains(label), "legend missing {}", label);
        }
        assert!(legend.contains("any other status"));
    }
}
