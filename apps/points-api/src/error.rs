//! # API Error Type
//!
//! Unified error type for the HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Points API                         │
//! │                                                                         │
//! │  Command Function  Result<T, ApiError>                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Bad JSON?         ─── CoreError::MalformedInput ──┐                    │
//! │  Failed checks?    ─── CoreError::InvalidReceipt ──┤  logged in full    │
//! │  Unknown id?       ─── StoreError::NotFound ───────┼──► ApiError ──►    │
//! │  Encode failed?    ─── CoreError::EncodingFailure ─┘  generic message   │
//! │                                                                         │
//! │  HTTP 400 { "code": "INVALID_RECEIPT",                                  │
//! │             "message": "Invalid receipt payload. Please verify input." }│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Clients never see which validation rule failed; the cause goes to the
//! log instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

use points_core::CoreError;
use points_store::StoreError;

/// Error body returned to HTTP clients.
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "No receipt found for that ID."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Generic human-readable message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body could not be decoded (400)
    MalformedInput,

    /// Receipt failed validation (400)
    InvalidReceipt,

    /// Blank receipt id in the path (400)
    MissingId,

    /// Unknown receipt id (404)
    NotFound,

    /// Response could not be produced (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status this code maps to.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::MalformedInput | ErrorCode::InvalidReceipt | ErrorCode::MissingId => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Submission arrived with no body at all.
    pub fn empty_body() -> Self {
        ApiError::new(
            ErrorCode::MalformedInput,
            "Request body is empty. Please verify input.",
        )
    }

    /// Receipt id path segment was blank.
    pub fn missing_id() -> Self {
        ApiError::new(ErrorCode::MissingId, "Missing receipt ID in path.")
    }
}

/// Converts core errors to API errors, logging the detail.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MalformedInput(cause) => {
                warn!(%cause, "receipt decode failed");
                ApiError::new(
                    ErrorCode::MalformedInput,
                    "Invalid JSON format. Please verify input.",
                )
            }
            CoreError::InvalidReceipt(cause) => {
                warn!(%cause, "receipt validation failed");
                ApiError::new(
                    ErrorCode::InvalidReceipt,
                    "Invalid receipt payload. Please verify input.",
                )
            }
            CoreError::EncodingFailure(cause) => {
                error!(%cause, "response encoding failed");
                ApiError::new(ErrorCode::Internal, "Could not encode response.")
            }
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => {
                warn!(%id, "points lookup for unknown receipt");
                ApiError::new(ErrorCode::NotFound, "No receipt found for that ID.")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use points_core::ValidationError;

    #[test]
    fn test_validation_detail_is_not_exposed() {
        let err: ApiError = CoreError::from(ValidationError::Required { field: "retailer" }).into();

        assert_eq!(err.code, ErrorCode::InvalidReceipt);
        assert!(!err.message.contains("retailer"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::MalformedInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InvalidReceipt.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::MissingId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_miss_maps_to_not_found() {
        let err: ApiError = StoreError::not_found("fake-id").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "No receipt found for that ID.");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::missing_id()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "MISSING_ID",
                "message": "Missing receipt ID in path."
            })
        );
    }
}
