//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::CorsSection;

pub mod cors;
pub mod handlers;

/// Build the API router, with CORS taken from configuration
pub fn create_router(cors: &CorsSection) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/calculate", post(handlers::calculate))
        .route("/operations", get(handlers::operations))
        .layer(cors::build_cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}
