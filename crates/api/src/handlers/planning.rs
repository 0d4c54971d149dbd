//! # Planning Handlers
//!
//! Endpoints that turn a planning request into exam slots. `generate`
//! stores the slots and reports per-slot failures; `preview` runs the same
//! expansion without touching the store.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use examplan_core::{
    models::planning::{PlanningPreview, PlanningRequest, PlanningResult},
    planner,
};
use std::sync::Arc;
use tracing::info;

use crate::{middleware::error_handling::AppError, ApiState};

/// Generates and stores the slots described by the request.
///
/// # Endpoint
///
/// ```text
/// POST /api/planning/generate
/// ```
///
/// Returns `400` when the body cannot be decoded, when the request breaks a
/// planning rule, or when it would produce more than the configured slot
/// limit; nothing is stored in those cases. Store failures for individual
/// slots do not fail the call; they are listed under `failed` in the
/// response.
#[axum::debug_handler]
pub async fn generate_slots(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<PlanningRequest>, JsonRejection>,
) -> Result<Json<PlanningResult>, AppError> {
    let Json(payload) = payload?;

    info!(
        activity_id = %payload.target_activity_id,
        range_start = %payload.range_start,
        range_end = %payload.range_end,
        "Generating slots"
    );

    let result =
        planner::generate_within(state.slot_store.as_ref(), &payload, state.max_slots).await?;

    Ok(Json(result))
}

/// Computes the slots a generation would create, without storing them.
///
/// # Endpoint
///
/// ```text
/// POST /api/planning/preview
/// ```
#[axum::debug_handler]
pub async fn preview_slots(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<PlanningRequest>, JsonRejection>,
) -> Result<Json<PlanningPreview>, AppError> {
    let Json(payload) = payload?;
    let preview = planner::preview_within(&payload, state.max_slots)?;

    Ok(Json(preview))
}
