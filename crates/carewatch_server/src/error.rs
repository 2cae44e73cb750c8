//! Conversion of service errors into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use carewatch_error::{
    CarewatchError, CarewatchErrorKind, StorageErrorKind, UploadErrorKind,
};
use serde_json::json;

/// A request failure, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(CarewatchError);

impl From<CarewatchError> for ApiError {
    fn from(err: CarewatchError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Wrap anything convertible into a service error.
    pub fn new(err: impl Into<CarewatchError>) -> Self {
        Self(err.into())
    }

    /// Status code and client-facing message.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self.0.kind() {
            CarewatchErrorKind::Upload(e) => match &e.kind {
                UploadErrorKind::MissingFile => {
                    (StatusCode::BAD_REQUEST, "No file uploaded".to_string())
                }
                UploadErrorKind::TooLarge(_) => {
                    (StatusCode::PAYLOAD_TOO_LARGE, e.kind.to_string())
                }
                UploadErrorKind::Multipart(_) => (StatusCode::BAD_REQUEST, e.kind.to_string()),
            },
            CarewatchErrorKind::Storage(e) => match &e.kind {
                StorageErrorKind::NotFound(_) => (StatusCode::NOT_FOUND, e.kind.to_string()),
                StorageErrorKind::InvalidPath(_) => {
                    (StatusCode::BAD_REQUEST, e.kind.to_string())
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to access upload storage".to_string(),
                ),
            },
            CarewatchErrorKind::Synthesis(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to synthesize alert: {}", e.kind),
            ),
            CarewatchErrorKind::Config(_) | CarewatchErrorKind::Server(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(error = %self.0, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self.0, status = status.as_u16(), "Request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
