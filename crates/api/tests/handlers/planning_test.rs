use axum::http::StatusCode;
use examplan_core::models::planning::{PlanningPreview, PlanningResult};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::{planning_body, TestContext};

#[tokio::test]
async fn test_generate_creates_slots() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/planning/generate")
        .json(&planning_body("practical-b"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let result: PlanningResult = response.json();
    assert_eq!(result.total_slot_count, 15);
    assert_eq!(result.total_capacity, 60);
    assert!(result.failed.is_empty());
    assert_eq!(ctx.store.len().await, 15);
}

#[tokio::test]
async fn test_generate_response_shape() {
    let ctx = TestContext::new();
    let mut body = planning_body("oral");
    body["rangeEnd"] = json!("2024-05-06");
    body["dayWindowEnd"] = json!("10:00");
    body["slotDurationMinutes"] = json!(30);

    let json: Value = ctx
        .server
        .post("/api/planning/generate")
        .json(&body)
        .await
        .json();

    assert_eq!(json["totalSlotCount"], 2);
    assert_eq!(json["totalCapacity"], 8);
    assert_eq!(json["slotsCreated"][0]["startTime"], "09:00");
    assert_eq!(json["slotsCreated"][0]["endTime"], "09:30");
    assert_eq!(json["slotsCreated"][1]["startTime"], "09:30");
    assert_eq!(json["slotsCreated"][1]["status"], "open");
    assert_eq!(json["slotsCreated"][1]["capacityUsed"], 0);
    assert_eq!(json["failed"], json!([]));
}

#[tokio::test]
async fn test_generate_twice_reports_duplicates() {
    let ctx = TestContext::new();
    let body = planning_body("practical-b");

    ctx.server.post("/api/planning/generate").json(&body).await;
    let second: PlanningResult = ctx
        .server
        .post("/api/planning/generate")
        .json(&body)
        .await
        .json();

    assert_eq!(second.total_slot_count, 0);
    assert_eq!(second.total_capacity, 0);
    assert_eq!(second.failed.len(), 15);
    assert_eq!(ctx.store.len().await, 15);
}

#[rstest]
#[case("rangeEnd", json!("2024-05-01"))]
#[case("slotDurationMinutes", json!(0))]
#[case("pauseMinutes", json!(-10))]
#[case("dayWindowEnd", json!("09:00"))]
#[case("capacityPerSlot", json!(0))]
#[case("allowedWeekdays", json!([]))]
#[case("allowedWeekdays", json!([1, 9]))]
#[tokio::test]
async fn test_invalid_request_is_rejected(#[case] field: &str, #[case] value: Value) {
    let ctx = TestContext::new();
    let mut body = planning_body("practical-b");
    body[field] = value;

    let response = ctx.server.post("/api/planning/generate").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert!(
        error["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid planning request:")
    );
    assert!(ctx.store.is_empty().await);
}

#[rstest]
#[case("/api/planning/generate", json!("nine"))]
#[case("/api/planning/generate", json!("09:00:10"))]
#[case("/api/planning/preview", json!("nine"))]
#[tokio::test]
async fn test_malformed_time_is_rejected_by_decoder(#[case] path: &str, #[case] value: Value) {
    let ctx = TestContext::new();
    let mut body = planning_body("practical-b");
    body["dayWindowStart"] = value;

    let response = ctx.server.post(path).json(&body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert!(error["error"].as_str().unwrap().starts_with("Validation error:"));
    assert!(ctx.store.is_empty().await);
}

#[tokio::test]
async fn test_multi_year_minute_slots_are_refused() {
    let ctx = TestContext::new();
    let mut body = planning_body("practical-b");
    body["rangeStart"] = json!("2024-01-01");
    body["rangeEnd"] = json!("2033-12-31");
    body["allowedWeekdays"] = json!([0, 1, 2, 3, 4, 5, 6]);
    body["dayWindowStart"] = json!("00:00");
    body["dayWindowEnd"] = json!("23:59");
    body["slotDurationMinutes"] = json!(1);

    for path in ["/api/planning/generate", "/api/planning/preview"] {
        let response = ctx.server.post(path).json(&body).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let error: Value = response.json();
        assert_eq!(
            error["error"],
            "Invalid planning request: request would create 5256667 slots, the limit is 10000"
        );
    }
    assert!(ctx.store.is_empty().await);
}

#[tokio::test]
async fn test_configured_slot_limit_applies() {
    let ctx = TestContext::with_max_slots(10);
    let body = planning_body("practical-b");

    let preview = ctx.server.post("/api/planning/preview").json(&body).await;
    let generate = ctx.server.post("/api/planning/generate").json(&body).await;

    assert_eq!(preview.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(generate.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = generate.json();
    assert_eq!(
        error["error"],
        "Invalid planning request: request would create 15 slots, the limit is 10"
    );
    assert!(ctx.store.is_empty().await);

    let ctx = TestContext::with_max_slots(15);
    let response = ctx.server.post("/api/planning/generate").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(ctx.store.len().await, 15);
}

#[tokio::test]
async fn test_preview_does_not_store() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/planning/preview")
        .json(&planning_body("theory"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let preview: PlanningPreview = response.json();
    assert_eq!(preview.total_slot_count, 15);
    assert_eq!(preview.total_capacity, 60);
    assert_eq!(preview.slots.len(), 15);
    assert!(ctx.store.is_empty().await);
}

#[tokio::test]
async fn test_preview_matches_generate() {
    let ctx = TestContext::new();
    let body = planning_body("theory");

    let preview: PlanningPreview = ctx
        .server
        .post("/api/planning/preview")
        .json(&body)
        .await
        .json();
    let result: PlanningResult = ctx
        .server
        .post("/api/planning/generate")
        .json(&body)
        .await
        .json();

    let previewed: Vec<_> = preview
        .slots
        .iter()
        .map(|s| (s.date, s.start_time, s.end_time))
        .collect();
    let created: Vec<_> = result
        .slots_created
        .iter()
        .map(|s| (s.date, s.start_time, s.end_time))
        .collect();
    assert_eq!(previewed, created);
}
