//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate holds the storefront's cart state machine and the types it
//! works on, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                    Renderer (web / terminal)                    │    │
//! │  │      Product Grid ──► Detail Overlay ──► Cart ──► Toast         │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ view-models                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                    storefront-app                               │    │
//! │  │    StoreContext, commands, ProductListView, ProductDetailView   │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │    │
//! │  │                                                                 │    │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────┐       │    │
//! │  │   │  types   │ │  money   │ │   cart   │ │ notification │       │    │
//! │  │   │ Product  │ │  Money   │ │ reducer  │ │ single slot  │       │    │
//! │  │   │ LineItem │ │ convert  │ │ CartStore│ │              │       │    │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────┘       │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLineItem, ExchangeRate)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart reducer and the per-session `CartStore`
//! - [`notification`] - Single-slot notification holder
//! - [`catalog`] - Read-only product catalog
//! - [`validation`] - Catalog validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Catalog, CartStore, ProductId};
//!
//! let catalog = Catalog::builtin();
//! let mut store = CartStore::new();
//!
//! let headphones = catalog.require(ProductId(1)).unwrap().clone();
//! store.add_to_cart(headphones.clone());
//! store.add_to_cart(headphones);
//!
//! assert_eq!(store.item_count(), 1);
//! assert_eq!(store.total().cents(), 2 * 12999);
//! assert_eq!(store.notification().message, "Added another Wireless Headphones to your cart!");
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod notification;
pub mod types;
pub mod validation;

pub use cart::{CartAction, CartEvent, CartState, CartStore};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use notification::{Notification, NotificationKind, Notifier};
pub use types::*;

/// Display conversion factor, scaled ×10000 (83.16 base → display units).
pub const DEFAULT_DISPLAY_RATE: u32 = 831_600;

/// Offers listed on every product detail overlay.
pub const STANDARD_OFFERS: &[&str] = &[
    "Get 10% off on your first purchase",
    "Free shipping on orders above ₹5000",
    "No cost EMI available",
];
