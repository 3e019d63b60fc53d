//! Route definitions
//!
//! Label routes are mounted under /api/v1; health sits at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, labels};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(label_routes())
}

/// Audit label routes
fn label_routes() -> Router<AppState> {
    Router::new()
        .route("/audit-labels", post(labels::resolve_labels))
        .route("/audit-labels/:namespace", get(labels::list_labels))
        .route("/audit-labels/:namespace/:code", get(labels::get_label))
}
