//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for the pension portal
//! - Session-token middleware
//! - Response types
//!
//! Handlers only talk to the core services carried in [`AppState`]; the
//! server binary wires the database repositories into those services.

pub mod middleware;
pub mod routes;

#[cfg(test)]
pub mod test_utils;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use pensio_core::access::AccessService;
use pensio_core::render::StatementRenderer;
use pensio_core::statement::StatementService;
use pensio_shared::JwtService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Statement aggregation service.
    pub statements: Arc<StatementService>,
    /// Identity-to-role resolution service.
    pub access: Arc<AccessService>,
    /// Renderer backing the export endpoint.
    pub renderer: Arc<dyn StatementRenderer>,
    /// JWT service for session-token validation.
    pub jwt_service: Arc<JwtService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
