//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::Dataset;
use crate::services::PieOptions;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Launch table, loaded once at startup and read-only afterwards
    pub dataset: Arc<Dataset>,
    /// Pie aggregation settings from configuration
    pub pie_options: PieOptions,
}

impl AppState {
    /// Create a new application state around a loaded dataset.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            pie_options: PieOptions::default(),
        }
    }

    pub fn with_pie_options(mut self, pie_options: PieOptions) -> Self {
        self.pie_options = pie_options;
        self
    }
}
