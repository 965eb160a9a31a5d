//! API route definitions.

mod docs;
pub(crate) mod health;
pub(crate) mod info;
pub(crate) mod root;

use axum::Router;
use axum::http::Request;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Level;

use crate::error::ApiError;

/// Build the complete API router.
///
/// # Route Structure
///
/// - `GET /` - Application banner
/// - `GET /health` - Health check
/// - `GET /info` - Static application metadata
/// - `GET /docs` - Swagger UI
/// - `GET /redoc` - ReDoc
/// - `GET /openapi.json` - OpenAPI document
///
/// Unknown paths and unsupported methods answer with the [`ApiError`]
/// envelope instead of axum's empty default bodies.
///
/// Paths match exactly: `/health/` is a 404, not a redirect to `/health`.
pub fn router() -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health_check))
        .route("/info", get(info::info))
        .route("/docs", get(docs::swagger_ui))
        .route("/redoc", get(docs::redoc))
        .route(docs::OPENAPI_PATH, get(docs::openapi_json))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

/// The router as served: access log on every request, CORS outermost so
/// preflights short-circuit before routing.
pub fn app() -> Router {
    router()
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::span!(
                    Level::INFO,
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
        .layer(cors_layer())
}

/// Permissive CORS: any origin, method and header, with credentials.
///
/// Origins, methods and headers are mirrored from the request, since a
/// literal `*` cannot be combined with credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
