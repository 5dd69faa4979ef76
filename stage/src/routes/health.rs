//! Health check endpoint.
//!
//! Liveness endpoint for load balancers and monitoring systems. A stage
//! only reaches the point of serving this route after its aggregation
//! configuration passed validation, so a successful response also implies
//! a well-formed configuration.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status (always "healthy" if reachable).
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Creates the health check routes.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "takt-stage",
        version: env!("CARGO_PKG_VERSION"),
    })
}
