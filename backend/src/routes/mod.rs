//! Route definitions for the RideWise backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Document parameter extraction
        .nest("/parameters", parameter_routes())
        // Demand predictions
        .nest("/predictions", prediction_routes())
}

/// Document parameter extraction routes
fn parameter_routes() -> Router<AppState> {
    Router::new().route("/extract", post(handlers::extract_from_document))
}

/// Demand prediction routes
fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/daily", post(handlers::predict_daily))
        .route("/hourly", post(handlers::predict_hourly))
}
