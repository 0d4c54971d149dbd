//! # ExamPlan API
//!
//! The API crate provides the web server for the exam slot planning service.
//! It exposes slot generation, dry-run previews, and slot listing per exam
//! activity.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Decode requests and call the planner or the slot store
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Handle environment and application configuration
//!
//! Storage is reached only through the [`SlotStore`] trait, so the server runs
//! the same way against PostgreSQL or the in-memory store.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, Router};
use eyre::{Result, WrapErr};
use examplan_core::{planner::DEFAULT_MAX_SLOTS, store::SlotStore};
use tokio::net::TcpListener;
use tracing::info;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Where generated slots are stored and read back
    pub slot_store: Arc<dyn SlotStore>,
    /// Largest number of slots a single planning request may produce
    pub max_slots: u64,
}

impl ApiState {
    pub fn new(slot_store: Arc<dyn SlotStore>) -> Arc<Self> {
        Self::with_max_slots(slot_store, DEFAULT_MAX_SLOTS)
    }

    pub fn with_max_slots(slot_store: Arc<dyn SlotStore>, max_slots: u64) -> Arc<Self> {
        Arc::new(Self {
            slot_store,
            max_slots,
        })
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Planning endpoints
        .merge(routes::planning::routes())
        // Slot read endpoints
        .merge(routes::slots::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and slot store
///
/// Logging is expected to be initialized by the caller.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `slot_store` - Storage backend for generated slots
pub async fn start_server(config: config::ApiConfig, slot_store: Arc<dyn SlotStore>) -> Result<()> {
    let app = app(ApiState::with_max_slots(slot_store, config.max_slots));

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Invalid origin in API_CORS_ORIGINS")?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Add request tracing and timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::timeout::TimeoutLayer::new(Duration::from_secs(
                config.request_timeout,
            ))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
