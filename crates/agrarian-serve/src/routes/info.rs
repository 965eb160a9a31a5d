//! Static application information.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{APP_NAME, PIPELINE, VERSION};

const DESCRIPTION: &str = "Demo Application for Private CI/CD Pipeline Testing";

/// Feature labels checked by the pipeline's smoke test.
pub const FEATURES: [&str; 6] = [
    "FastAPI framework",
    "Docker containerized",
    "Private CI/CD pipeline",
    "Health monitoring",
    "Professional logging",
    "CORS enabled",
];

/// Public endpoints, in the order they are advertised.
pub const ENDPOINTS: [&str; 5] = ["/", "/health", "/info", "/docs", "/redoc"];

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InfoResponse {
    app_name: &'static str,
    version: &'static str,
    description: &'static str,
    features: Vec<&'static str>,
    endpoints: Vec<&'static str>,
    pipeline: &'static str,
}

/// Application information endpoint.
#[utoipa::path(
    get,
    path = "/info",
    responses((status = 200, description = "Application metadata", body = InfoResponse)),
    tag = "app"
)]
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        app_name: APP_NAME,
        version: VERSION,
        description: DESCRIPTION,
        features: FEATURES.to_vec(),
        endpoints: ENDPOINTS.to_vec(),
        pipeline: PIPELINE,
    })
}
