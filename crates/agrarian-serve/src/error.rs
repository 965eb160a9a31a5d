//! API error types and response formatting.
//!
//! Every HTTP-level error leaves the service in the same envelope:
//!
//! ```json
//! {"message": "Not Found", "timestamp": "2026-10-16T09:41:07.123456"}
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::clock;

/// API error type that converts to appropriate HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No route matches the request path.
    #[error("Not Found")]
    NotFound,

    /// The route exists but not for this method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Any other error raised with an explicit status and detail.
    #[error("{detail}")]
    Http { status: StatusCode, detail: String },
}

impl ApiError {
    /// Build an error with an arbitrary status code and detail message.
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self::Http {
            status,
            detail: detail.into(),
        }
    }

    /// HTTP status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Http { status, .. } => *status,
        }
    }
}

/// JSON error response body.
#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    message: String,
    timestamp: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "server error");
        } else {
            tracing::debug!(status = status.as_u16(), error = %message, "client error");
        }

        let body = ErrorResponse {
            message,
            timestamp: clock::now_iso8601(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn error_display_not_found() {
        assert_eq!(ApiError::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn error_display_http() {
        let err = ApiError::new(StatusCode::IM_A_TEAPOT, "short and stout");
        assert_eq!(err.to_string(), "short and stout");
        assert_eq!(err.status(), StatusCode::IM_A_TEAPOT);
    }

    #[tokio::test]
    async fn error_into_response_not_found() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Not Found");
        assert!(body["timestamp"].is_string());
        assert_eq!(body.as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn error_into_response_method_not_allowed() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn error_into_response_preserves_status() {
        let err = ApiError::new(StatusCode::SERVICE_UNAVAILABLE, "draining");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["message"], "draining");
    }
}
