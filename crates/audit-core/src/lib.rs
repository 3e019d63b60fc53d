//! # audit-core
//!
//! Domain layer for the ticket dashboard audit log: typed action and resource
//! codes, their display labels, and total code-to-label resolution.
//! This crate has zero dependencies on infrastructure (web framework, config, etc.).

pub mod error;
pub mod labels;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use error::DomainError;
pub use labels::{
    catalog, lookup_label, resolve_action_label, resolve_label, resolve_resource_label,
    unknown_label, LabelEntry,
};
pub use value_objects::{ActionType, LabelNamespace, ResourceType, UnknownCodeError};
