use axum::{
    extract::{Path, State},
    Json,
};
use examplan_core::{errors::PlanError, models::slot::Slot};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteSlotsResponse {
    pub deleted: u64,
}

#[axum::debug_handler]
pub async fn list_activity_slots(
    State(state): State<Arc<ApiState>>,
    Path(activity_id): Path<String>,
) -> Result<Json<Vec<Slot>>, AppError> {
    let slots = state.slot_store.list_slots_by_activity(&activity_id).await?;

    Ok(Json(slots))
}

#[axum::debug_handler]
pub async fn delete_activity_slots(
    State(state): State<Arc<ApiState>>,
    Path(activity_id): Path<String>,
) -> Result<Json<DeleteSlotsResponse>, AppError> {
    let deleted = state.slot_store.delete_slots_by_activity(&activity_id).await?;
    tracing::info!("Deleted {} slots for activity {}", deleted, activity_id);

    Ok(Json(DeleteSlotsResponse { deleted }))
}

#[axum::debug_handler]
pub async fn get_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Slot>, AppError> {
    let slot = state
        .slot_store
        .get_slot(id)
        .await?
        .ok_or_else(|| PlanError::NotFound(format!("Slot with ID {} not found", id)))?;

    Ok(Json(slot))
}
