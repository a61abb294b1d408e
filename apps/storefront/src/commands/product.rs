//! # Product Commands
//!
//! Read-only access to the catalog for the product grid and the detail
//! overlay. Catalog lookups are the one place an unknown id is an error:
//! a renderer asking for a product that was never listed is a bug.

use serde::Serialize;
use storefront_core::{Catalog, Product, ProductId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::ConfigState;

/// Product DTO (Data Transfer Object) for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Base-currency price.
    pub price_cents: i64,
    /// Converted, formatted price, e.g. "₹10809.97".
    pub display_price: String,
}

impl ProductDto {
    pub fn new(product: &Product, config: &ConfigState) -> Self {
        ProductDto {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price_cents: product.price.cents(),
            display_price: config.display_price(product.price),
        }
    }
}

/// Lists every product in catalog order.
pub fn list_products(catalog: &Catalog, config: &ConfigState) -> Vec<ProductDto> {
    debug!(count = catalog.len(), "list_products command");
    catalog
        .products()
        .iter()
        .map(|p| ProductDto::new(p, config))
        .collect()
}

/// Gets a single product by id.
pub fn get_product(
    catalog: &Catalog,
    config: &ConfigState,
    product_id: ProductId,
) -> Result<ProductDto, ApiError> {
    debug!(product_id = %product_id, "get_product command");
    let product = catalog.require(product_id)?;
    Ok(ProductDto::new(product, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_list_products_follows_catalog_order() {
        let catalog = Catalog::builtin();
        let products = list_products(&catalog, &ConfigState::default());

        assert_eq!(products.len(), catalog.len());
        let ids: Vec<ProductId> = products.iter().map(|p| p.id).collect();
        let expected: Vec<ProductId> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_get_product_converts_price() {
        let catalog = Catalog::builtin();
        let dto = get_product(&catalog, &ConfigState::default(), ProductId(1)).unwrap();

        assert_eq!(dto.name, "Wireless Headphones");
        assert_eq!(dto.price_cents, 12999);
        assert_eq!(dto.display_price, "₹10809.97");
    }

    #[test]
    fn test_get_product_unknown_id() {
        let catalog = Catalog::builtin();
        let err = get_product(&catalog, &ConfigState::default(), ProductId(404)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
