//! Request DTOs for API endpoints

use serde::Deserialize;
use validator::Validate;

/// Batch label lookup, typically one page of audit-log entries
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ResolveLabelsRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "At most 100 action types per request"))]
    pub action_types: Vec<i64>,

    #[serde(default)]
    #[validate(length(max = 100, message = "At most 100 resource types per request"))]
    pub resource_types: Vec<i64>,
}
