//! Label resolution for audit action and resource codes

mod catalog;
mod resolver;

pub use catalog::{catalog, LabelEntry};
pub use resolver::{
    lookup_label, resolve_action_label, resolve_label, resolve_resource_label, unknown_label,
};
