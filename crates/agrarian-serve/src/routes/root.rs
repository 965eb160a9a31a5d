//! Service root endpoint.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{APP_TITLE, PIPELINE, VERSION, clock};

/// Environment label reported when `ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Root response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RootResponse {
    message: &'static str,
    version: &'static str,
    timestamp: String,
    environment: String,
    status: &'static str,
    pipeline: &'static str,
}

/// Deployment environment, looked up on every call.
///
/// Non-UTF-8 values are reported lossily rather than replaced by the default.
pub fn current_environment() -> String {
    std::env::var_os("ENVIRONMENT")
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

/// Root endpoint with application information.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Application banner", body = RootResponse)),
    tag = "app"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: APP_TITLE,
        version: VERSION,
        timestamp: clock::now_iso8601(),
        environment: current_environment(),
        status: "running",
        pipeline: PIPELINE,
    })
}
