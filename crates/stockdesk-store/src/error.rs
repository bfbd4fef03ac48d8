//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! Repository call
//!      │
//!      ▼
//! StoreError (this module) ← Adds context and categorization
//!      │
//!      ▼
//! ApiError (in app) ← Serialized for the front end
//! ```

use thiserror::Error;

/// Repository operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A different record already uses this business key.
    ///
    /// ## When This Occurs
    /// - Saving a second invoice numbered "INV-1001"
    /// - Two catalog items with the same SKU
    #[error("Duplicate {field}: '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// A writer panicked while holding the repository lock.
    #[error("{0} repository lock poisoned")]
    LockPoisoned(&'static str),
}

impl StoreError {
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            StoreError::not_found("Invoice", "inv-9").to_string(),
            "Invoice not found: inv-9"
        );
        assert_eq!(
            StoreError::duplicate("number", "INV-1001").to_string(),
            "Duplicate number: 'INV-1001' already exists"
        );
    }
}
