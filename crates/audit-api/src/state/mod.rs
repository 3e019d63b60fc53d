//! Application state
//!
//! Holds the shared state for the Axum application.

use std::sync::Arc;

use audit_common::AppConfig;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
