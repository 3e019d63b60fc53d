//! Domain errors - error types for the domain layer
//!
//! Label resolution itself never fails; these cover input that cannot be
//! turned into a lookup at all.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unknown label namespace: {0}")]
    InvalidNamespace(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidNamespace(_) => "INVALID_NAMESPACE",
        }
    }
}
