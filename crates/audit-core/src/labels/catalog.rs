//! Label catalogs - every known code of a namespace with its label

use serde::Serialize;

use crate::value_objects::{ActionType, LabelNamespace, ResourceType};

/// A known code and its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelEntry {
    pub code: i16,
    pub label: &'static str,
}

impl From<ActionType> for LabelEntry {
    fn from(action: ActionType) -> Self {
        Self {
            code: action.as_i16(),
            label: action.label(),
        }
    }
}

impl From<ResourceType> for LabelEntry {
    fn from(resource: ResourceType) -> Self {
        Self {
            code: resource.as_i16(),
            label: resource.label(),
        }
    }
}

/// All known entries of a namespace in ascending code order
#[must_use]
pub fn catalog(namespace: LabelNamespace) -> Vec<LabelEntry> {
    match namespace {
        LabelNamespace::Action => ActionType::ALL.into_iter().map(LabelEntry::from).collect(),
        LabelNamespace::Resource => ResourceType::ALL.into_iter().map(LabelEntry::from).collect(),
    }
}
