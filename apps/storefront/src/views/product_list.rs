//! # Product List View
//!
//! The product grid. Stateless with respect to the cart; its only local
//! state is which product, if any, is open in the detail overlay.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐                    │
//! │  │  card 1  │ │  card 2  │ │  card 3  │ │  card 4  │                    │
//! │  │ [Add]    │ │ [Add]    │ │ [Add]    │ │ [Add]    │                    │
//! │  └────┬─────┘ └──────────┘ └──────────┘ └──────────┘                    │
//! │       │ click card              [Add] ──► commands::cart::add_to_cart   │
//! │       ▼                                                                 │
//! │  select_product(id) ──► ProductDetailView ──► close_detail()            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use storefront_core::{Catalog, Product, ProductId};
use tracing::{debug, warn};

use crate::commands::cart::{self, CartResponse};
use crate::commands::product::{self, ProductDto};
use crate::error::ApiError;
use crate::state::{ConfigState, StoreContext};

use super::ProductDetailView;

#[derive(Debug, Clone)]
pub struct ProductListView {
    catalog: Arc<Catalog>,
    config: Arc<ConfigState>,
    selected: Option<ProductId>,
}

impl ProductListView {
    pub fn new(catalog: Arc<Catalog>, config: Arc<ConfigState>) -> Self {
        ProductListView {
            catalog,
            config,
            selected: None,
        }
    }

    /// One card per catalog product, in catalog order.
    pub fn cards(&self) -> Vec<ProductDto> {
        product::list_products(&self.catalog, &self.config)
    }

    /// Opens the detail overlay for `id`.
    pub fn select_product(&mut self, id: ProductId) -> Result<ProductDetailView, ApiError> {
        let product = self.lookup(id, "select_product")?;
        debug!(product_id = %id, "Detail view opened");
        let detail = ProductDetailView::new(product, &self.config);
        self.selected = Some(id);
        Ok(detail)
    }

    pub fn close_detail(&mut self) {
        if let Some(id) = self.selected.take() {
            debug!(product_id = %id, "Detail view closed");
        }
    }

    pub fn is_detail_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<ProductId> {
        self.selected
    }

    /// The open detail overlay, if any.
    pub fn detail(&self) -> Option<ProductDetailView> {
        self.selected
            .and_then(|id| self.catalog.get(id))
            .map(|product| ProductDetailView::new(product, &self.config))
    }

    /// The card's "Add to Cart" button. Does not open the overlay.
    pub fn add_to_cart(&self, ctx: &StoreContext, id: ProductId) -> Result<CartResponse, ApiError> {
        let product = self.lookup(id, "add_to_cart")?;
        cart::add_to_cart(ctx, &self.config, product.clone())
    }

    fn lookup(&self, id: ProductId, operation: &'static str) -> Result<&Product, ApiError> {
        self.catalog.require(id).map_err(|e| {
            warn!(product_id = %id, operation, "Rejected: product not in catalog");
            ApiError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn view() -> ProductListView {
        ProductListView::new(Arc::new(Catalog::builtin()), Arc::new(ConfigState::default()))
    }

    #[test]
    fn test_cards_cover_catalog() {
        let view = view();
        assert_eq!(view.cards().len(), Catalog::builtin().len());
    }

    #[test]
    fn test_select_and_close() {
        let mut view = view();
        assert!(!view.is_detail_open());
        assert!(view.detail().is_none());

        let detail = view.select_product(ProductId(2)).unwrap();
        assert_eq!(detail.product.name, "Smart Watch");
        assert!(view.is_detail_open());
        assert_eq!(view.selected(), Some(ProductId(2)));
        assert_eq!(view.detail().map(|d| d.product.id), Some(ProductId(2)));

        view.close_detail();
        assert!(!view.is_detail_open());
        assert!(view.detail().is_none());
    }

    #[test]
    fn test_select_unknown_product_keeps_selection() {
        let mut view = view();
        view.select_product(ProductId(1)).unwrap();

        let err = view.select_product(ProductId(77)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(view.selected(), Some(ProductId(1)));
    }

    #[test]
    fn test_add_to_cart_leaves_overlay_closed() {
        let view = view();
        let ctx = StoreContext::new();
        ctx.open().unwrap();

        let cart = view.add_to_cart(&ctx, ProductId(4)).unwrap();
        assert_eq!(cart.items[0].name, "Mechanical Keyboard");
        assert_eq!(cart.notification.message, "Mechanical Keyboard added to your cart!");
        assert!(!view.is_detail_open());
    }

    #[test]
    fn test_add_unknown_product_is_rejected_without_touching_cart() {
        let view = view();
        let ctx = StoreContext::new();
        ctx.open().unwrap();

        let err = view.add_to_cart(&ctx, ProductId(404)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("404"));

        let cart = cart::get_cart(&ctx, &ConfigState::default()).unwrap();
        assert!(cart.items.is_empty());
        assert!(!cart.notification.visible);
    }
}
