//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing,
//! request timeout), and creates the axum router ready for serving.

use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::error::handle_middleware_error;
use super::handlers;
use super::state::AppState;

/// Default upper bound on a whole request, including outbound lookups.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    create_router_with_timeout(state, REQUEST_TIMEOUT)
}

/// Like [`create_router`], with an explicit request time budget. Requests
/// that exceed it get a JSON `504`.
pub fn create_router_with_timeout(state: AppState, request_timeout: Duration) -> Router {
    // Any origin may call the calculators, as browsers embed them directly.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/calculate", post(handlers::calculate_isthkaal))
        .route("/calculate-nakshatra", post(handlers::calculate_nakshatra))
        // Birth details are tiny; reject anything larger early.
        .layer(DefaultBodyLimit::max(16 * 1024))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(request_timeout),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
