//! # Product Detail View
//!
//! The overlay opened from a product card: image, name, converted price,
//! description, the standard offers and an "Add to Cart" action.

use serde::Serialize;
use storefront_core::{Product, STANDARD_OFFERS};

use crate::commands::cart::{self, CartResponse};
use crate::commands::product::ProductDto;
use crate::error::ApiError;
use crate::state::{ConfigState, StoreContext};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailView {
    #[serde(flatten)]
    pub product: ProductDto,
    pub offers: Vec<String>,
    #[serde(skip)]
    source: Product,
}

impl ProductDetailView {
    pub fn new(product: &Product, config: &ConfigState) -> Self {
        ProductDetailView {
            product: ProductDto::new(product, config),
            offers: STANDARD_OFFERS.iter().map(|o| o.to_string()).collect(),
            source: product.clone(),
        }
    }

    /// "Add to Cart" from the overlay.
    pub fn add_to_cart(
        &self,
        ctx: &StoreContext,
        config: &ConfigState,
    ) -> Result<CartResponse, ApiError> {
        cart::add_to_cart(ctx, config, self.source.clone())
    }
}
