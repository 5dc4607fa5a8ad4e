//! # API Error Type
//!
//! Unified error type for calculator commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Layerline                              │
//! │                                                                         │
//! │  Website                     Rust Backend                               │
//! │  ───────                     ────────────                               │
//! │                                                                         │
//! │  invoke('set_hours_per_day', { hours: 30 })                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad arguments? ─── serde_json::Error ────────────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Validation Error? ─── ValidationError ────────► ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "VALIDATION_ERROR",                                          │
//! │    "message": "hours_per_day must be between 1 and 24" }                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Selecting an unknown product is not an error: the session falls back to
//! the first catalog entry. Only the strict `get_product` command reports
//! `NOT_FOUND`.

use serde::Serialize;
use layerline_core::{CoreError, ValidationError};

/// API error returned from calculator commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: Spaceship"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Command name not recognized
    UnknownCommand,

    /// Internal server error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unknown_command(command: &str) -> Self {
        ApiError::new(ErrorCode::UnknownCommand, format!("Unknown command: {}", command))
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(name) => ApiError::not_found("Product", &name),
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Malformed command arguments or request lines.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::validation(format!("Invalid arguments: {}", err))
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

    #[test]
    fn test_product_not_found_maps_to_not_found() {
        let err = ApiError::from(CoreError::ProductNotFound("Spaceship".to_string()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: Spaceship");
    }

    #[test]
    fn test_validation_maps_to_validation_error() {
        let err = ApiError::from(CoreError::Validation(ValidationError::OutOfRange {
            field: "hours_per_day".to_string(),
            min: 1,
            max: 24,
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "hours_per_day must be between 1 and 24");
    }

    #[test]
    fn test_bad_json_arguments_are_validation_errors() {
        let parse: Result<f64, _> = serde_json::from_str("\"four\"");
        let err = ApiError::from(parse.unwrap_err());
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.starts_with("Invalid arguments"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::unknown_command("fly")).unwrap();
        assert_eq!(json["code"], "UNKNOWN_COMMAND");
        assert_eq!(json["message"], "Unknown command: fly");
    }

    #[test]
    fn test_display() {
        let err = ApiError::internal("boom");
        assert_eq!(err.to_string(), "[Internal] boom");
    }
}
