//! Error types for Todo Core.
//!
//! Defines a unified error type that maps cleanly to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error type for Todo Core operations.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error response body for API clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl TodoError {
    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            TodoError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoError::BadRequest(_) => StatusCode::BAD_REQUEST,
            TodoError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, message, details) = match &self {
            TodoError::NotFound(msg) => ("NOT_FOUND", msg.clone(), None),
            TodoError::BadRequest(msg) => ("BAD_REQUEST", msg.clone(), None),
            TodoError::Config(msg) => ("CONFIG_ERROR", msg.clone(), None),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for Todo operations.
pub type TodoResult<T> = Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            TodoError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TodoError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TodoError::Config("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_config_error_body() {
        use http_body_util::BodyExt;

        let response = TodoError::Config("missing port".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "missing port", "code": "CONFIG_ERROR"})
        );
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = TodoError::NotFound("Todo 3 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
