//! Preview Error Types
//!
//! Errors for the preview server and their conversion to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::error::TandemError;

#[derive(Error, Debug)]
pub enum PreviewError {
    /// Unknown chart, topic or page
    #[error("Not found: {0}")]
    NotFound(String),

    /// Content could not be assembled
    #[error("Content error: {0}")]
    Content(#[from] TandemError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl PreviewError {
    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            PreviewError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            PreviewError::Content(
                TandemError::UnknownChart(_)
                | TandemError::UnknownTopic(_)
                | TandemError::UnknownPage(_),
            ) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            PreviewError::Content(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONTENT_ERROR"),
            PreviewError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            PreviewError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for PreviewError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Preview error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for preview handlers
pub type PreviewResult<T> = Result<T, PreviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_map_to_not_found() {
        let err = PreviewError::from(TandemError::UnknownChart("pie".to_string()));
        assert_eq!(err.status().0, StatusCode::NOT_FOUND);

        let err = PreviewError::Internal("boom".to_string());
        assert_eq!(err.status().0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = PreviewError::NotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
