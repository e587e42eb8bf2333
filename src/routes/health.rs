use axum::{routing::get, Json, Router};

use crate::models::{AppState, HealthStatus};

pub fn create_router() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

/// Health check endpoint for load balancers / Route53.
async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: "DSS Group Website",
    })
}
