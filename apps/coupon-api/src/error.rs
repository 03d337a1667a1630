//! # API Error Type
//!
//! Unified error type for coupon commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Coupon Catalog                     │
//! │                                                                         │
//! │  Caller                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  create_coupon(dto)                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<ApiResponse<T>, ApiError>                                │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  StoreError::ValidationFailed ── VALIDATION_ERROR (400) ───────►│  │
//! │  │  StoreError::DuplicateName ───── DUPLICATE_NAME (400) ─────────►│  │
//! │  │  StoreError::NotFound ────────── NOT_FOUND (404) ──────────────►│  │
//! │  │  StoreError::EmptyCollection ─── NOT_FOUND (404) ──────────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Errors serialize with a machine-readable `code` and a human-readable
//! `message`; validation failures also list each offending field.

use std::fmt;

use coupon_core::ValidationError;
use coupon_store::StoreError;
use serde::Serialize;

/// API error returned from coupon commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "percent must be between 1 and 100 (got 0)",
///   "violations": [
///     { "field": "percent", "message": "percent must be between 1 and 100 (got 0)" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field violations (validation errors only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldViolation>,
}

/// One offending input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl From<&ValidationError> for FieldViolation {
    fn from(err: &ValidationError) -> Self {
        FieldViolation {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found, or nothing to list (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Name already used by another coupon (400)
    DuplicateName,
}

impl ErrorCode {
    /// The HTTP status a transport would answer with.
    pub fn http_equivalent(self) -> u16 {
        match self {
            ErrorCode::NotFound => 404,
            ErrorCode::ValidationError | ErrorCode::DuplicateName => 400,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            violations: Vec::new(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }

    /// The HTTP status a transport would answer with.
    pub fn http_equivalent(&self) -> u16 {
        self.code.http_equivalent()
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ValidationFailed(errors) => ApiError {
                code: ErrorCode::ValidationError,
                message: errors.to_string(),
                violations: errors.iter().map(FieldViolation::from).collect(),
            },
            StoreError::DuplicateName { name } => ApiError::new(
                ErrorCode::DuplicateName,
                format!("A coupon with name {} already exists", name),
            ),
            StoreError::NotFound { id } => {
                ApiError::not_found(format!("A coupon with id {} does not exist", id))
            }
            StoreError::EmptyCollection => ApiError::not_found("No coupons exist"),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
