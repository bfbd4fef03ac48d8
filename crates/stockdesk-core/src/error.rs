//! # Error Types
//!
//! Domain-specific error types for stockdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockdesk-core errors (this file)                                     │
//! │  ├── CoreError        - Editing rule violations                        │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  stockdesk-store errors                                                │
//! │  └── StoreError       - Repository failures                            │
//! │                                                                         │
//! │  app errors                                                            │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError ← StoreError             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ledger itself never returns an error; these cover the rules around it.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

#[derive(Debug, Error)]
pub enum CoreError {
    /// Editor referenced a line that isn't in its ledger.
    #[error("Line not found: {0}")]
    LineNotFound(String),

    /// Catalog item is retired and can't be picked for new lines.
    #[error("Catalog item {sku} is inactive")]
    CatalogItemInactive { sku: String },

    /// Forms always keep one row visible.
    #[error("A document must keep at least one line")]
    LastLine,

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value isn't accepted here (e.g. a line discount kind the document
    /// type doesn't use).
    #[error("{field} not allowed: {reason}")]
    NotAllowed { field: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
