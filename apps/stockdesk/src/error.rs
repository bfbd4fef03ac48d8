//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockdesk                              │
//! │                                                                         │
//! │  Command Function  ──  Result<T, ApiError>                             │
//! │         │                                                               │
//! │         ├── Store error?      StoreError::NotFound ────────┐           │
//! │         │                                                   ▼           │
//! │         ├── Editing rule?     CoreError::LastLine ──────► ApiError ──► │
//! │         │                                                   ▲           │
//! │         └── Bad field?        ValidationError ─────────────┘           │
//! │                                                                         │
//! │  Front end / CLI receives { code: "NOT_FOUND", message: "..." }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use stockdesk_core::{CoreError, ValidationError};
use stockdesk_store::StoreError;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Invoice not found: INV-9"
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Business key already taken (409)
    Conflict,

    /// Editing rule refused the change (422)
    BusinessLogic,

    /// Storage failed (500)
    StoreError,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            StoreError::Duplicate { field, value } => ApiError::new(
                ErrorCode::Conflict,
                format!("{} '{}' already exists", field, value),
            ),
            StoreError::LockPoisoned(kind) => {
                tracing::error!(kind, "Repository lock poisoned");
                ApiError::new(ErrorCode::StoreError, "Storage unavailable")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LineNotFound(id) => ApiError::not_found("Line", &id),
            err @ (CoreError::CatalogItemInactive { .. } | CoreError::LastLine) => {
                ApiError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
