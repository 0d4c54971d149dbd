use std::sync::Arc;

use axum::http::StatusCode;
use examplan_api::handlers::slots::DeleteSlotsResponse;
use examplan_core::models::planning::PlanningResult;
use examplan_core::models::slot::Slot;
use examplan_db::mock::repositories::MockSlotRepo;
use pretty_assertions::assert_eq;
use serde_json::Value;
use uuid::Uuid;

use crate::test_utils::{planning_body, server_with, TestContext};

async fn generate(ctx: &TestContext, activity_id: &str) -> PlanningResult {
    ctx.server
        .post("/api/planning/generate")
        .json(&planning_body(activity_id))
        .await
        .json()
}

#[tokio::test]
async fn test_list_activity_slots() {
    let ctx = TestContext::new();
    let result = generate(&ctx, "practical-b").await;
    generate(&ctx, "theory").await;

    let response = ctx.server.get("/api/activities/practical-b/slots").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let slots: Vec<Slot> = response.json();
    assert_eq!(slots, result.slots_created);
}

#[tokio::test]
async fn test_list_unknown_activity_is_empty() {
    let ctx = TestContext::new();

    let slots: Vec<Slot> = ctx.server.get("/api/activities/nothing/slots").await.json();

    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_get_slot() {
    let ctx = TestContext::new();
    let result = generate(&ctx, "practical-b").await;
    let expected = result.slots_created[3].clone();

    let response = ctx.server.get(&format!("/api/slots/{}", expected.id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Slot>(), expected);
}

#[tokio::test]
async fn test_get_missing_slot() {
    let ctx = TestContext::new();
    let id = Uuid::new_v4();

    let response = ctx.server.get(&format!("/api/slots/{}", id)).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let error: Value = response.json();
    assert_eq!(
        error["error"],
        format!("Resource not found: Slot with ID {} not found", id)
    );
}

#[tokio::test]
async fn test_delete_then_regenerate() {
    let ctx = TestContext::new();
    generate(&ctx, "practical-b").await;
    generate(&ctx, "theory").await;

    let deleted: DeleteSlotsResponse = ctx
        .server
        .delete("/api/activities/practical-b/slots")
        .await
        .json();
    assert_eq!(deleted.deleted, 15);
    assert_eq!(ctx.store.len().await, 15);

    let again = generate(&ctx, "practical-b").await;
    assert_eq!(again.total_slot_count, 15);
    assert!(again.failed.is_empty());
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let mut store = MockSlotRepo::new();
    store
        .expect_list_slots_by_activity()
        .returning(|_| Err(eyre::eyre!("connection refused")));
    let server = server_with(Arc::new(store));

    let response = server.get("/api/activities/practical-b/slots").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = response.json();
    assert_eq!(error["error"], "Database error: connection refused");
}
