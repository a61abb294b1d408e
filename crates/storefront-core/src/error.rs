//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                           │
//! │  └── ValidationError  - Catalog record validation failures              │
//! │                                                                         │
//! │  storefront-app errors (separate crate)                                 │
//! │  └── ApiError         - What the renderer sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Renderer                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart transitions never fail: an unknown id is a no-op, not an error.
//! The variants below cover what happens around the cart.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A cart operation ran without an open store.
    ///
    /// ## When This Occurs
    /// - A view dispatches before the session opened its store
    /// - A view keeps a context handle after the session was closed
    ///
    /// This is a wiring bug in the caller, so the message names the
    /// operation that was attempted.
    #[error("{operation} called without an open cart store; open the store context first")]
    StoreNotInitialized { operation: String },

    /// Product id is not part of the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Catalog source could not be decoded.
    #[error("Catalog is not valid JSON: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Duplicate value (e.g., two products sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_initialized_names_operation() {
        let err = CoreError::StoreNotInitialized {
            operation: "add_to_cart".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "add_to_cart called without an open cart store; open the store context first"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "3".to_string(),
        };
        assert_eq!(err.to_string(), "id '3' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
