//! Audit label handlers
//!
//! Every lookup answers 200; codes without a label come back as `Unknown (N)`
//! with `known: false`.

use axum::Json;
use tracing::debug;

use crate::dto::{LabelCatalogResponse, LabelResponse, ResolveLabelsRequest, ResolveLabelsResponse};
use crate::extractors::{ApiPath, LabelPath, NamespacePath, ValidatedJson};
use crate::response::ApiResult;

/// List every known label of a namespace
///
/// GET /audit-labels/{namespace}
pub async fn list_labels(
    ApiPath(path): ApiPath<NamespacePath>,
) -> ApiResult<Json<LabelCatalogResponse>> {
    let namespace = path.namespace()?;
    Ok(Json(LabelCatalogResponse::new(namespace)))
}

/// Resolve a single code
///
/// GET /audit-labels/{namespace}/{code}
pub async fn get_label(ApiPath(path): ApiPath<LabelPath>) -> ApiResult<Json<LabelResponse>> {
    let namespace = path.namespace()?;
    let code = path.code()?;

    let response = LabelResponse::new(namespace, code);
    if !response.resolved.known {
        debug!(%namespace, code, "No label for audit code");
    }
    Ok(Json(response))
}

/// Resolve a batch of action and resource codes
///
/// POST /audit-labels
pub async fn resolve_labels(
    ValidatedJson(request): ValidatedJson<ResolveLabelsRequest>,
) -> ApiResult<Json<ResolveLabelsResponse>> {
    let response = ResolveLabelsResponse::resolve(&request.action_types, &request.resource_types);

    let unknown = response.unknown_count();
    if unknown > 0 {
        debug!(
            unknown,
            total = request.action_types.len() + request.resource_types.len(),
            "Batch contained audit codes without labels"
        );
    }
    Ok(Json(response))
}
