//! Value objects - immutable types that represent domain concepts

mod action_type;
mod namespace;
mod resource_type;

pub use action_type::ActionType;
pub use namespace::LabelNamespace;
pub use resource_type::ResourceType;

/// Error when converting a raw code into a typed action or resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnknownCodeError {
    #[error("unknown audit action type: {0}")]
    Action(i16),

    #[error("unknown audit resource type: {0}")]
    Resource(i16),
}
