//! API error type mapped to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use serde_json::json;
use tenpin_core::RollError;
use tracing::warn;

/// An error surfaced to API clients, carrying its HTTP status.
///
/// Roll-validation failures pass the engine's message through verbatim;
/// the body is always `{"error": "<message>"}`.
#[derive(Debug, Clone, Display, Error)]
#[display("{message}")]
pub struct ApiError {
    /// HTTP status for the response.
    pub status: StatusCode,
    /// Caller-facing message.
    pub message: String,
}

impl ApiError {
    /// A 400 for malformed or rule-violating input.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// A 404 for a missing game or player.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// A 429 for rate-limited clients.
    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: message.into(),
        }
    }
}

impl From<RollError> for ApiError {
    fn from(err: RollError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, message = %self.message, "Request rejected");
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
