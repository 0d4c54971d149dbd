use axum::http::StatusCode;
use examplan_api::routes::health::{HealthResponse, VersionResponse};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "ok");
    assert_eq!(body.service, "examplan-api");
}

#[tokio::test]
async fn test_version() {
    let ctx = TestContext::new();

    let body: VersionResponse = ctx.server.get("/version").await.json();

    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}
