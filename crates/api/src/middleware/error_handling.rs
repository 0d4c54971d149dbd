//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint fails the same way.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use examplan_core::errors::{InvalidRequest, PlanError};
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps a [`PlanError`] and implements `IntoResponse`, so
/// handlers can return `Result<_, AppError>` and use `?` on planner and
/// store calls.
#[derive(Debug)]
pub struct AppError(pub PlanError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            PlanError::NotFound(_) => StatusCode::NOT_FOUND,
            PlanError::Validation(_) | PlanError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            PlanError::Database(_) => {
                error!("Request failed: {:?}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        AppError(err)
    }
}

impl From<InvalidRequest> for AppError {
    fn from(err: InvalidRequest) -> Self {
        AppError(PlanError::InvalidRequest(err))
    }
}

/// Undecodable request bodies answer with the same JSON error shape.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(PlanError::Validation(rejection.body_text()))
    }
}

/// Store failures surface as `PlanError::Database`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(PlanError::Database(err))
    }
}

/// Maps a PlanError to an HTTP response
pub fn map_error(err: PlanError) -> Response {
    AppError(err).into_response()
}
