use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/planning/generate",
            post(handlers::planning::generate_slots),
        )
        .route(
            "/api/planning/preview",
            post(handlers::planning::preview_slots),
        )
}
