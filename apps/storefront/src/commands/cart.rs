//! # Cart Commands
//!
//! Commands for cart manipulation. Each one dispatches into the session's
//! `CartStore` and answers with the re-rendered cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart    ┌──────────┐                             │
//! │  │  Empty   │ ───────────────► │ In Cart  │ ◄─┐ increment_quantity      │
//! │  │  Cart    │                  │          │ ──┘ decrement_quantity      │
//! │  └──────────┘                  └──────────┘     remove_from_cart        │
//! │       ▲                             │                                   │
//! │       └──────── clear_cart ─────────┘                                   │
//! │                                                                         │
//! │  Every command also refreshes the notification slot.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{CartEvent, CartLineItem, CartStore, Notification, Product, ProductId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, StoreContext};

/// One rendered cart line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
    pub display_unit_price: String,
    pub display_line_total: String,
}

impl CartLineView {
    fn new(item: &CartLineItem, config: &ConfigState) -> Self {
        let line_total = item.line_total();
        CartLineView {
            id: item.id(),
            name: item.product.name.clone(),
            image: item.product.image.clone(),
            quantity: item.quantity,
            unit_price_cents: item.product.price.cents(),
            line_total_cents: line_total.cents(),
            display_unit_price: config.display_price(item.product.price),
            display_line_total: config.display_price(line_total),
        }
    }
}

/// Cart response including items, totals and the notification slot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineView>,
    pub item_count: usize,
    pub total_quantity: u64,
    /// Total in the base currency.
    pub total_cents: i64,
    pub display_total: String,
    pub notification: Notification,
}

impl CartResponse {
    pub fn new(store: &CartStore, config: &ConfigState) -> Self {
        CartResponse {
            items: store
                .items()
                .iter()
                .map(|item| CartLineView::new(item, config))
                .collect(),
            item_count: store.item_count(),
            total_quantity: store.total_quantity(),
            total_cents: store.total().cents(),
            display_total: config.display_price(store.total()),
            notification: store.notification().clone(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(ctx: &StoreContext, config: &ConfigState) -> Result<CartResponse, ApiError> {
    debug!("get_cart command");
    ctx.with_store("get_cart", |store| CartResponse::new(store, config))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases by one
/// - If product not in cart: appended with quantity 1
pub fn add_to_cart(
    ctx: &StoreContext,
    config: &ConfigState,
    product: Product,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product.id, "add_to_cart command");
    run(ctx, config, "add_to_cart", |store| store.add_to_cart(product))
}

/// Removes a line from the cart. Unknown ids leave the cart as it was.
pub fn remove_from_cart(
    ctx: &StoreContext,
    config: &ConfigState,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");
    run(ctx, config, "remove_from_cart", |store| {
        store.remove_from_cart(product_id)
    })
}

pub fn increment_quantity(
    ctx: &StoreContext,
    config: &ConfigState,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "increment_quantity command");
    run(ctx, config, "increment_quantity", |store| {
        store.increment_quantity(product_id)
    })
}

/// Lowers a line by one. A line at quantity 1 stays at 1.
pub fn decrement_quantity(
    ctx: &StoreContext,
    config: &ConfigState,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "decrement_quantity command");
    run(ctx, config, "decrement_quantity", |store| {
        store.decrement_quantity(product_id)
    })
}

/// Clears all items from the cart.
pub fn clear_cart(ctx: &StoreContext, config: &ConfigState) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");
    run(ctx, config, "clear_cart", CartStore::clear_cart)
}

/// Returns the notification slot.
pub fn get_notification(ctx: &StoreContext) -> Result<Notification, ApiError> {
    ctx.with_store("get_notification", |store| store.notification().clone())
}

/// Hides the notification (close button or the renderer's timeout).
pub fn dismiss_notification(ctx: &StoreContext) -> Result<Notification, ApiError> {
    debug!("dismiss_notification command");
    ctx.with_store_mut("dismiss_notification", |store| {
        store.dismiss_notification();
        store.notification().clone()
    })
}

fn run<F>(
    ctx: &StoreContext,
    config: &ConfigState,
    operation: &str,
    mutate: F,
) -> Result<CartResponse, ApiError>
where
    F: FnOnce(&mut CartStore) -> CartEvent,
{
    ctx.with_store_mut(operation, |store| {
        let event = mutate(store);
        if !event.changed() {
            debug!(operation, "Cart unchanged");
        }
        CartResponse::new(store, config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_core::{Money, NotificationKind};

    fn setup() -> (StoreContext, ConfigState) {
        let ctx = StoreContext::new();
        ctx.open().unwrap();
        (ctx, ConfigState::default())
    }

    fn mug() -> Product {
        Product {
            id: ProductId(1),
            name: "Mug".to_string(),
            price: Money::from_cents(1000),
            description: String::new(),
            image: "/mug.jpg".to_string(),
        }
    }

    #[test]
    fn test_add_renders_lines_and_totals() {
        let (ctx, config) = setup();
        add_to_cart(&ctx, &config, mug()).unwrap();
        let cart = add_to_cart(&ctx, &config, mug()).unwrap();

        assert_eq!(cart.item_count, 1);
        assert_eq!(cart.total_quantity, 2);
        assert_eq!(cart.total_cents, 2000);
        assert_eq!(cart.display_total, "₹1663.20");
        assert_eq!(cart.items[0].display_unit_price, "₹831.60");
        assert_eq!(cart.items[0].line_total_cents, 2000);
        assert_eq!(cart.notification.message, "Added another Mug to your cart!");
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let (ctx, config) = setup();
        add_to_cart(&ctx, &config, mug()).unwrap();

        let cart = remove_from_cart(&ctx, &config, ProductId(99)).unwrap();
        assert_eq!(cart.item_count, 1);
        let cart = increment_quantity(&ctx, &config, ProductId(99)).unwrap();
        assert_eq!(cart.total_quantity, 1);
        let cart = decrement_quantity(&ctx, &config, ProductId(99)).unwrap();
        assert_eq!(cart.total_cents, 1000);
    }

    #[test]
    fn test_clear_and_notification_commands() {
        let (ctx, config) = setup();
        add_to_cart(&ctx, &config, mug()).unwrap();

        let cart = clear_cart(&ctx, &config).unwrap();
        assert!(cart.items.is_empty());
        assert_eq!(cart.total_cents, 0);
        assert_eq!(cart.notification.kind, NotificationKind::Info);

        let hidden = dismiss_notification(&ctx).unwrap();
        assert!(!hidden.visible);
        assert_eq!(hidden.message, "Your cart has been cleared");
        assert_eq!(get_notification(&ctx).unwrap(), hidden);
    }

    #[test]
    fn test_commands_fail_on_closed_context() {
        let ctx = StoreContext::new();
        let config = ConfigState::default();

        let err = add_to_cart(&ctx, &config, mug()).unwrap_err();
        assert_eq!(err.code, ErrorCode::StoreNotInitialized);
        assert!(get_cart(&ctx, &config).is_err());
        assert!(dismiss_notification(&ctx).is_err());
    }
}
