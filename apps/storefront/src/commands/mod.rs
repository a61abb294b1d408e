//! # Commands Module
//!
//! Everything a renderer can ask the storefront to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog listing and lookup
//! └── cart.rs     ◄─── Cart mutations and the notification slot
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn list_products(catalog: &Catalog, config: &ConfigState)
//!
//! // Only needs the store
//! fn get_notification(ctx: &StoreContext)
//!
//! // Store plus config for display prices
//! fn add_to_cart(ctx: &StoreContext, config: &ConfigState, product: Product)
//! ```

pub mod cart;
pub mod product;
