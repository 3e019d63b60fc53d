//! API Integration Tests
//!
//! Each test boots its own server on an ephemeral port.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use audit_common::RateLimitConfig;
use integration_tests::{assert_json, assert_status, fixtures::*, test_config, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let health: HealthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(health.status, "healthy");
    assert!(!health.version.is_empty());
}

// ============================================================================
// Single Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_get_known_action_label() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/audit-labels/action/92").await.unwrap();
    let label: LabelResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(label.namespace, "action");
    assert_eq!(label.code, 92);
    assert_eq!(label.label, "Ticket Close");
    assert!(label.known);
}

#[tokio::test]
async fn test_get_known_resource_label() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/audit-labels/resource/18").await.unwrap();
    let label: LabelResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(label.namespace, "resource");
    assert_eq!(label.label, "Bot Staff");
    assert!(label.known);
}

#[tokio::test]
async fn test_unknown_code_is_not_404() {
    let server = TestServer::start().await.expect("Failed to start server");

    for (path, expected) in [
        ("/api/v1/audit-labels/action/2", "Unknown (2)"),
        ("/api/v1/audit-labels/action/-5", "Unknown (-5)"),
        ("/api/v1/audit-labels/resource/0", "Unknown (0)"),
        (
            "/api/v1/audit-labels/resource/-9223372036854775808",
            "Unknown (-9223372036854775808)",
        ),
    ] {
        let response = server.get(path).await.unwrap();
        let label: LabelResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(label.label, expected, "{path}");
        assert!(!label.known);
    }
}

#[tokio::test]
async fn test_namespaces_are_independent() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/audit-labels/action/12").await.unwrap();
    let action: LabelResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(action.label, "Panel Delete");

    let response = server.get("/api/v1/audit-labels/resource/12").await.unwrap();
    let resource: LabelResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(resource.label, "Ticket");
}

#[tokio::test]
async fn test_namespace_aliases() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/audit-labels/Actions/1").await.unwrap();
    let label: LabelResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(label.namespace, "action");
    assert_eq!(label.label, "Settings Update");
}

#[tokio::test]
async fn test_invalid_namespace() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/audit-labels/guild/1").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "INVALID_NAMESPACE");
    assert_eq!(body.error.message, "Unknown label namespace: guild");
}

#[tokio::test]
async fn test_invalid_code() {
    let server = TestServer::start().await.expect("Failed to start server");

    for path in [
        "/api/v1/audit-labels/action/twelve",
        "/api/v1/audit-labels/action/1.5",
        "/api/v1/audit-labels/action/9223372036854775808",
    ] {
        let response = server.get(path).await.unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.error.code, "INVALID_PATH_PARAMETER", "{path}");
    }
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_action_catalog() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/audit-labels/action").await.unwrap();
    let catalog: LabelCatalogResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(catalog.namespace, "action");
    assert_eq!(catalog.labels.len(), 45);
    assert_eq!(catalog.labels[0].code, 1);
    assert_eq!(catalog.labels[0].label, "Settings Update");
    assert_eq!(catalog.labels[44].code, 301);
    assert!(catalog.labels.windows(2).all(|pair| pair[0].code < pair[1].code));
}

#[tokio::test]
async fn test_resource_catalog() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/audit-labels/resources").await.unwrap();
    let catalog: LabelCatalogResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(catalog.namespace, "resource");
    let codes: Vec<i16> = catalog.labels.iter().map(|entry| entry.code).collect();
    assert_eq!(codes, (1..=18).collect::<Vec<i16>>());
}

#[tokio::test]
async fn test_catalog_invalid_namespace() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/audit-labels/tickets").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Batch Tests
// ============================================================================

#[tokio::test]
async fn test_resolve_batch() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = ResolveLabelsRequest::new(&[60, 999, 60, 1], &[8, 19]);

    let response = server.post("/api/v1/audit-labels", &request).await.unwrap();
    let batch: ResolveLabelsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let actions: Vec<&str> = batch.action_types.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        actions,
        ["Team Create", "Unknown (999)", "Team Create", "Settings Update"]
    );
    assert_eq!(batch.action_types[1].code, 999);
    assert!(!batch.action_types[1].known);

    assert_eq!(batch.resource_types[0].label, "Team");
    assert!(batch.resource_types[0].known);
    assert_eq!(batch.resource_types[1].label, "Unknown (19)");
}

#[tokio::test]
async fn test_resolve_empty_body_object() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post_raw("/api/v1/audit-labels", "{}").await.unwrap();
    let batch: ResolveLabelsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(batch.action_types.is_empty());
    assert!(batch.resource_types.is_empty());
}

#[tokio::test]
async fn test_resolve_malformed_body() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_raw("/api/v1/audit-labels", r#"{"action_types": ["one"]}"#)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "INVALID_BODY");
}

#[tokio::test]
async fn test_resolve_batch_too_large() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = ResolveLabelsRequest::new(&[1; 101], &[]);

    let response = server.post("/api/v1/audit-labels", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "VALIDATION_ERROR");
    let details = body.error.details.expect("validation details");
    assert!(details.get("action_types").is_some());
}

// ============================================================================
// Middleware Tests
// ============================================================================

#[tokio::test]
async fn test_request_id_header() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/audit-labels/action/1").await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_rate_limit_rejects_with_envelope_and_skips_health() {
    let mut config = test_config();
    config.rate_limit = RateLimitConfig {
        requests_per_second: 1,
        burst: 2,
    };
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    for _ in 0..2 {
        let response = server.get("/api/v1/audit-labels/action/1").await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get("/api/v1/audit-labels/action/1").await.unwrap();
    assert!(response.headers().contains_key("x-ratelimit-after"));
    let body: ErrorBody = assert_json(response, StatusCode::TOO_MANY_REQUESTS)
        .await
        .unwrap();
    assert_eq!(body.error.code, "RATE_LIMIT_EXCEEDED");
    assert_eq!(body.error.message, "Rate limit exceeded");

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
