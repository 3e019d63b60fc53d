//! Code-to-label resolution
//!
//! Every function here is total over `i64`: codes missing from a table resolve
//! to `Unknown (<code>)` instead of failing, so rendering code never has to
//! branch on a missing label.

use std::borrow::Cow;

use crate::value_objects::{ActionType, LabelNamespace, ResourceType};

/// Placeholder for codes with no known label
#[must_use]
pub fn unknown_label(code: i64) -> String {
    format!("Unknown ({code})")
}

/// Find the stored label for a code, `None` if the namespace has no such code
#[must_use]
pub fn lookup_label(namespace: LabelNamespace, code: i64) -> Option<&'static str> {
    match namespace {
        LabelNamespace::Action => ActionType::from_code(code).map(ActionType::label),
        LabelNamespace::Resource => ResourceType::from_code(code).map(ResourceType::label),
    }
}

/// Resolve a code to its label within a namespace
#[must_use]
pub fn resolve_label(namespace: LabelNamespace, code: i64) -> Cow<'static, str> {
    match lookup_label(namespace, code) {
        Some(label) => Cow::Borrowed(label),
        None => Cow::Owned(unknown_label(code)),
    }
}

/// Resolve an audit action type code
#[must_use]
pub fn resolve_action_label(code: i64) -> Cow<'static, str> {
    resolve_label(LabelNamespace::Action, code)
}

/// Resolve an audit resource type code
#[must_use]
pub fn resolve_resource_label(code: i64) -> Cow<'static, str> {
    resolve_label(LabelNamespace::Resource, code)
}
