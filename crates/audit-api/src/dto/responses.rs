//! Response DTOs for API endpoints

use audit_core::{catalog, lookup_label, unknown_label, LabelEntry, LabelNamespace};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A code paired with its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLabel {
    pub code: i64,
    pub label: String,
    /// False when `label` is the `Unknown (N)` placeholder
    pub known: bool,
}

impl ResolvedLabel {
    pub fn resolve(namespace: LabelNamespace, code: i64) -> Self {
        match lookup_label(namespace, code) {
            Some(label) => Self {
                code,
                label: label.to_string(),
                known: true,
            },
            None => Self {
                code,
                label: unknown_label(code),
                known: false,
            },
        }
    }
}

/// Single label lookup
#[derive(Debug, Clone, Serialize)]
pub struct LabelResponse {
    pub namespace: LabelNamespace,
    #[serde(flatten)]
    pub resolved: ResolvedLabel,
}

impl LabelResponse {
    pub fn new(namespace: LabelNamespace, code: i64) -> Self {
        Self {
            namespace,
            resolved: ResolvedLabel::resolve(namespace, code),
        }
    }
}

/// Every known label of a namespace
#[derive(Debug, Clone, Serialize)]
pub struct LabelCatalogResponse {
    pub namespace: LabelNamespace,
    pub labels: Vec<LabelEntry>,
}

impl LabelCatalogResponse {
    pub fn new(namespace: LabelNamespace) -> Self {
        Self {
            namespace,
            labels: catalog(namespace),
        }
    }
}

/// Batch lookup result, in request order
#[derive(Debug, Clone, Serialize)]
pub struct ResolveLabelsResponse {
    pub action_types: Vec<ResolvedLabel>,
    pub resource_types: Vec<ResolvedLabel>,
}

impl ResolveLabelsResponse {
    pub fn resolve(action_types: &[i64], resource_types: &[i64]) -> Self {
        let resolve_all = |namespace: LabelNamespace, codes: &[i64]| -> Vec<ResolvedLabel> {
            codes
                .iter()
                .map(|&code| ResolvedLabel::resolve(namespace, code))
                .collect()
        };

        Self {
            action_types: resolve_all(LabelNamespace::Action, action_types),
            resource_types: resolve_all(LabelNamespace::Resource, resource_types),
        }
    }

    /// Number of codes in the batch that had no label
    pub fn unknown_count(&self) -> usize {
        self.action_types
            .iter()
            .chain(&self.resource_types)
            .filter(|resolved| !resolved.known)
            .count()
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now(),
        }
    }
}
