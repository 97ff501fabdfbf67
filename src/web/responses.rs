//! HTTP response types and utilities
//!
//! Error bodies share one JSON envelope ([`ApiResponse`]) so clients can
//! tell a failed request apart from an empty result.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Response timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create an error response
    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Map an [`AppError`] to a status code and JSON error body
pub fn handle_error(error: AppError) -> Response {
    let (status, message) = match &error {
        AppError::ExternalService { service, message } => (
            StatusCode::BAD_GATEWAY,
            format!("External service error ({service}): {message}"),
        ),
        AppError::Configuration { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Configuration error: {message}"),
        ),
        AppError::Table(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Table error: {err}"),
        ),
        AppError::Io(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "File operation failed".to_string(),
        ),
        AppError::Template(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Page rendering failed".to_string(),
        ),
    };

    if status.is_server_error() {
        error!(status = status.as_u16(), "Request failed: {}", error);
    }

    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

/// Wrap `data` in a successful [`ApiResponse`]
pub fn ok<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::success(data)))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        handle_error(self)
    }
}
