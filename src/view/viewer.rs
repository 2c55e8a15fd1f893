//! Status viewer - owns the load lifecycle for the pipeline collection

use crate::core::Pipeline;
use crate::source::{PipelineSource, SourceError};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Lifecycle of the pipeline status view
///
/// The view is always in exactly one of these states. `Loading` carries no
/// data, so stale or partial pipelines cannot be observed while a fetch is
/// in flight.
#[derive(Debug, Clone)]
pub enum ViewState {
    /// A fetch is in flight; nothing to show yet
    Loading,
    /// The fetch resolved and the pipeline collection is available
    Loaded {
        pipelines: Vec<Pipeline>,
        loaded_at: DateTime<Utc>,
    },
    /// The fetch failed; a reload starts the cycle over
    Failed { error: String },
}

impl ViewState {
    /// Check if the view is still waiting on a fetch
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The loaded pipeline collection, if any
    pub fn pipelines(&self) -> Option<&[Pipeline]> {
        match self {
            ViewState::Loaded { pipelines, .. } => Some(pipelines),
            _ => None,
        }
    }
}

/// Owns the view state and the one-shot asynchronous load that populates it
///
/// The fetch runs as a spawned task whose handle the viewer keeps. Dropping
/// the viewer, or starting a newer load, aborts the in-flight task so a
/// torn-down view can never receive a late update.
pub struct StatusViewer<S> {
    source: Arc<S>,
    state: ViewState,
    inflight: Option<JoinHandle<Result<Vec<Pipeline>, SourceError>>>,
}

impl<S: PipelineSource + 'static> StatusViewer<S> {
    /// Create a viewer in the `Loading` state with no fetch in flight
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            state: ViewState::Loading,
            inflight: None,
        }
    }

    /// Start a load: reset to `Loading` and spawn the fetch
    ///
    /// Any fetch already in flight is aborted; only the newest load may
    /// transition the state.
    pub fn begin_load(&mut self) {
        info!("Starting pipeline status load");
        self.state = ViewState::Loading;
        let source = self.source.clone();
        let handle = tokio::spawn(async move { source.fetch_pipelines().await });
        if let Some(superseded) = self.inflight.replace(handle) {
            superseded.abort();
        }
    }

    /// Wait for the in-flight fetch and apply its outcome
    ///
    /// Transitions to `Loaded` on success and `Failed` on a source error.
    /// A cancelled fetch does not touch the state. With no fetch in flight
    /// this returns the current state unchanged.
    pub async fn finish_load(&mut self) -> &ViewState {
        if let Some(handle) = self.inflight.take() {
            match handle.await {
                Ok(Ok(pipelines)) => {
                    info!("Loaded {} pipelines", pipelines.len());
                    self.state = ViewState::Loaded {
                        pipelines,
                        loaded_at: Utc::now(),
                    };
                }
                Ok(Err(err)) => {
                    warn!("Pipeline status load failed: {}", err);
                    self.state = ViewState::Failed {
                        error: err.to_string(),
                    };
                }
                Err(join_err) => {
                    if !join_err.is_cancelled() {
                        warn!("Pipeline status load task died: {}", join_err);
                        self.state = ViewState::Failed {
                            error: join_err.to_string(),
                        };
                    }
                }
            }
        }
        &self.state
    }

    /// Run a full load cycle: `begin_load` then `finish_load`
    pub async fn load(&mut self) -> &ViewState {
        self.begin_load();
        self.finish_load().await
    }

    /// Current view state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Check if the view is still waiting on a fetch
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The loaded pipeline collection, if any
    pub fn pipelines(&self) -> Option<&[Pipeline]> {
        self.state.pipelines()
    }
}

impl<S> Drop for StatusViewer<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }
    }
}
