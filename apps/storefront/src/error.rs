//! # API Error Type
//!
//! Unified error type for storefront commands and views.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Renderer                    Rust                                       │
//! │  ────────                    ────                                       │
//! │                                                                         │
//! │  add_to_cart(...)                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐   │
//! │  │  Command Function → Result<T, ApiError>                          │   │
//! │  │                                                                  │   │
//! │  │  Store not open?   ─── CoreError::StoreNotInitialized ──┐        │   │
//! │  │  Unknown product?  ─── CoreError::ProductNotFound ──────┼─► Api  │   │
//! │  │  Bad catalog file? ─── CatalogLoadError ────────────────┘  Error │   │
//! │  │                                                                  │   │
//! │  │  Unknown id on remove/increment/decrement ─► Ok (no-op)          │   │
//! │  └──────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The renderer receives `{ "code": "...", "message": "..." }`.

use serde::Serialize;
use storefront_core::CoreError;

use crate::state::CatalogLoadError;

/// Error returned from storefront commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart used outside an open store context
    StoreNotInitialized,

    /// Catalog could not be loaded
    CatalogError,

    /// Internal error
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::StoreNotInitialized { .. } => {
                tracing::error!("{}", err);
                ApiError::new(ErrorCode::StoreNotInitialized, err.to_string())
            }
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::CatalogFormat(e) => {
                ApiError::new(ErrorCode::CatalogError, format!("Invalid catalog: {}", e))
            }
            CoreError::Validation(e) => ApiError::new(ErrorCode::ValidationError, e.to_string()),
        }
    }
}

impl From<CatalogLoadError> for ApiError {
    fn from(err: CatalogLoadError) -> Self {
        match err {
            CatalogLoadError::Core(core) => ApiError::from(core),
            other => ApiError::new(ErrorCode::CatalogError, other.to_string()),
        }
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
    use storefront_core::{ProductId, ValidationError};

    #[test]
    fn test_store_not_initialized_maps_code() {
        let err = ApiError::from(CoreError::StoreNotInitialized {
            operation: "clear_cart".to_string(),
        });
        assert_eq!(err.code, ErrorCode::StoreNotInitialized);
        assert!(err.message.starts_with("clear_cart called without an open cart store"));
    }

    #[test]
    fn test_product_not_found_maps_code() {
        let err = ApiError::from(CoreError::ProductNotFound(ProductId(12)));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 12");
    }

    #[test]
    fn test_validation_maps_code() {
        let err = ApiError::from(CoreError::Validation(ValidationError::Duplicate {
            field: "id".to_string(),
            value: "1".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Product", 3);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 3");
    }

    #[test]
    fn test_display() {
        let err = ApiError::internal("boom");
        assert_eq!(err.to_string(), "[Internal] boom");
    }
}
