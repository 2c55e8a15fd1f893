//! Pipeline status view lifecycle

pub mod viewer;

pub use viewer::{StatusViewer, ViewState};
