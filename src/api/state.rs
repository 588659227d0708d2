//! Application state for the workforce report API.

use std::sync::Arc;

use crate::config::ReportConfig;
use crate::export::DocumentExporter;

/// Shared application state.
///
/// Holds the report configuration and the injected document exporter.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ReportConfig>,
    exporter: Arc<dyn DocumentExporter>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ReportConfig, exporter: Arc<dyn DocumentExporter>) -> Self {
        Self {
            config: Arc::new(config),
            exporter,
        }
    }

    /// Returns the report configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Returns the document exporter.
    pub fn exporter(&self) -> &dyn DocumentExporter {
        self.exporter.as_ref()
    }
}
