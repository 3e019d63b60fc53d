//! Path parameter extractors
//!
//! Type-safe extraction of label namespaces and codes from path parameters.

use audit_core::LabelNamespace;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Path extractor that rejects with an `ApiError` instead of plain text
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(ApiPath(inner))
    }
}

/// Path parameters with namespace
#[derive(Debug, serde::Deserialize)]
pub struct NamespacePath {
    pub namespace: String,
}

impl NamespacePath {
    pub fn namespace(&self) -> Result<LabelNamespace, ApiError> {
        Ok(self.namespace.parse()?)
    }
}

/// Path parameters with namespace and code
#[derive(Debug, serde::Deserialize)]
pub struct LabelPath {
    pub namespace: String,
    pub code: String,
}

impl LabelPath {
    pub fn namespace(&self) -> Result<LabelNamespace, ApiError> {
        Ok(self.namespace.parse()?)
    }

    /// Parse code as a signed integer; any value in `i64` range is accepted
    pub fn code(&self) -> Result<i64, ApiError> {
        self.code
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid code format"))
    }
}
