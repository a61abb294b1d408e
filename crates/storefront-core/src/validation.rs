//! # Validation Module
//!
//! Checks applied to catalog records when a catalog is loaded.
//!
//! Catalog data is trusted for numbers: prices and ids are not range
//! checked. What the cart does rely on is that ids are unique (a line item
//! is looked up by id) and that every product has a name to show in
//! notifications.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ```rust
/// use storefront_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Wireless Headphones").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a full product list: every name present, no repeated id.
pub fn validate_catalog(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        validate_product_name(&product.name)?;

        if !seen.insert(product.id) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: product.id.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::ProductId;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            price: Money::from_cents(100),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Lamp").is_ok());
        assert!(validate_product_name("").is_err());
    }

    #[test]
    fn test_validate_catalog_accepts_unique_ids() {
        let products = vec![product(1, "A"), product(2, "B")];
        assert!(validate_catalog(&products).is_ok());
        assert!(validate_catalog(&[]).is_ok());
    }

    #[test]
    fn test_validate_catalog_rejects_duplicate_id() {
        let products = vec![product(1, "A"), product(1, "B")];
        let err = validate_catalog(&products).unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { ref value, .. } if value == "1"));
    }

    #[test]
    fn test_validate_catalog_rejects_blank_name() {
        let products = vec![product(1, "A"), product(2, " ")];
        assert!(matches!(
            validate_catalog(&products),
            Err(ValidationError::Required { .. })
        ));
    }
}
