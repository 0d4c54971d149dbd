use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/activities/:activity_id/slots",
            get(handlers::slots::list_activity_slots)
                .delete(handlers::slots::delete_activity_slots),
        )
        .route("/api/slots/:id", get(handlers::slots::get_slot))
}
