//! Health check endpoint.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{PIPELINE, VERSION, clock};

/// Health check response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
    /// Seconds since the UNIX epoch, not since process start.
    uptime: f64,
    version: &'static str,
    pipeline: &'static str,
}

/// Public health check endpoint.
///
/// Returns basic service health without authentication.
/// Use this for liveness probes.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "app"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: clock::now_iso8601(),
        uptime: clock::epoch_seconds(),
        version: VERSION,
        pipeline: PIPELINE,
    })
}
