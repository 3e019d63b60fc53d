//! Test fixtures
//!
//! Request bodies and typed views of API responses.

use serde::{Deserialize, Serialize};

/// Batch lookup request
#[derive(Debug, Default, Serialize)]
pub struct ResolveLabelsRequest {
    pub action_types: Vec<i64>,
    pub resource_types: Vec<i64>,
}

impl ResolveLabelsRequest {
    pub fn new(action_types: &[i64], resource_types: &[i64]) -> Self {
        Self {
            action_types: action_types.to_vec(),
            resource_types: resource_types.to_vec(),
        }
    }
}

/// Resolved code
#[derive(Debug, Deserialize)]
pub struct ResolvedLabel {
    pub code: i64,
    pub label: String,
    pub known: bool,
}

/// Single label lookup response
#[derive(Debug, Deserialize)]
pub struct LabelResponse {
    pub namespace: String,
    pub code: i64,
    pub label: String,
    pub known: bool,
}

/// Catalog entry
#[derive(Debug, Deserialize)]
pub struct LabelEntry {
    pub code: i16,
    pub label: String,
}

/// Catalog response
#[derive(Debug, Deserialize)]
pub struct LabelCatalogResponse {
    pub namespace: String,
    pub labels: Vec<LabelEntry>,
}

/// Batch lookup response
#[derive(Debug, Deserialize)]
pub struct ResolveLabelsResponse {
    pub action_types: Vec<ResolvedLabel>,
    pub resource_types: Vec<ResolvedLabel>,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Health response
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
