//! Label namespace - selects which code table a lookup runs against

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The two independent code spaces of the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelNamespace {
    /// Action type codes
    Action,
    /// Resource type codes
    Resource,
}

impl LabelNamespace {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Resource => "resource",
        }
    }
}

impl fmt::Display for LabelNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelNamespace {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "action" | "actions" => Ok(Self::Action),
            "resource" | "resources" => Ok(Self::Resource),
            _ => Err(DomainError::InvalidNamespace(s.to_string())),
        }
    }
}
