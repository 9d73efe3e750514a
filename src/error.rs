//! Error types for Mathserve.
//!
//! Defines a unified error type that maps cleanly to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::domain::MessageEnvelope;
use crate::engine::ComputeError;

/// Unified error type for request handling.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No operation matches the method and path.
    #[error("Route not found: {method} {path}")]
    NotFound { method: String, path: String },

    /// Well-formed input outside the domain of the operation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Input that could not be parsed or computed.
    #[error("Malformed request: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn not_found(method: impl Into<String>, path: impl Into<String>) -> Self {
        ApiError::NotFound {
            method: method.into(),
            path: path.into(),
        }
    }

    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        ApiError::Malformed(detail.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Malformed(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<ComputeError> for ApiError {
    fn from(err: ComputeError) -> Self {
        if err.is_validation() {
            ApiError::Validation(err.to_string())
        } else {
            ApiError::Malformed(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Details stay in the logs; clients only ever see the placeholder.
        match &self {
            ApiError::NotFound { method, path } => {
                tracing::debug!(%method, %path, "No route matched");
            }
            ApiError::Validation(msg) => {
                tracing::debug!(error = %msg, "Validation failed");
            }
            ApiError::Malformed(msg) => {
                tracing::warn!(error = %msg, "Malformed request");
            }
        }

        (status, Json(MessageEnvelope::default())).into_response()
    }
}

/// Result type alias for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::not_found("GET", "/x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation("n < 0".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::malformed("bad json").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_compute_error_conversion() {
        assert!(matches!(
            ApiError::from(ComputeError::Negative(-1)),
            ApiError::Validation(_)
        ));
        assert!(matches!(ApiError::from(ComputeError::Empty), ApiError::Validation(_)));
        assert!(matches!(
            ApiError::from(ComputeError::NonFinite),
            ApiError::Malformed(_)
        ));
    }

    #[tokio::test]
    async fn test_response_hides_details() {
        let response = ApiError::malformed("expected value at line 1 column 1").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"message":"none"}"#);
    }
}
