//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server faults to Sentry
//! before responding to the client. Every error renders as a `{status, data}`
//! envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;

use crate::response::{Envelope, SERVER_ERROR};

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error, answered with the generic fault payload.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Internal server error answered with a route-specific payload.
    #[error("Internal error: {detail}")]
    Fault { detail: String, data: Value },
}

impl AppError {
    /// Replace the fault payload of an internal error.
    ///
    /// Routes disagree on what a fault looks like (`"Server error"`,
    /// `"server error"`, or the error text itself); client errors pass
    /// through unchanged.
    #[must_use]
    pub fn with_fault_data(self, data: impl Into<Value>) -> Self {
        match self {
            Self::Internal(detail) | Self::Fault { detail, .. } => Self::Fault {
                detail,
                data: data.into(),
            },
            other => other,
        }
    }

    /// The HTTP status this error answers with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) | Self::Fault { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients unless the route asked to
        let data = match self {
            Self::NotFound(message) | Self::BadRequest(message) => Value::String(message),
            Self::Internal(_) => Value::String(SERVER_ERROR.to_string()),
            Self::Fault { data, .. } => data,
        };

        Envelope::new(status, data).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use http_body_util::BodyExt;
    use serde_json::json;

    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("goal-123".to_string());
        assert_eq!(err.to_string(), "Not found: goal-123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = AppError::Internal("lock poisoned".to_string()).into_response();
        assert_eq!(
            body_json(response).await,
            json!({ "status": 500, "data": "Server error" })
        );
    }

    #[tokio::test]
    async fn test_fault_data_overrides_payload() {
        let response = AppError::Internal("lock poisoned".to_string())
            .with_fault_data("server error")
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "status": 500, "data": "server error" })
        );
    }

    #[test]
    fn test_fault_data_leaves_client_errors_alone() {
        let err = AppError::BadRequest("bad".to_string()).with_fault_data("server error");
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "bad"));
    }
}
