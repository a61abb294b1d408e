//! # Storefront App Library
//!
//! Session layer for the storefront: loads config and catalog, owns the
//! store context, and exposes commands and view-models to a renderer.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (bootstrap & demo run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── StoreContext (cart store lifecycle)
//! │   ├── catalog.rs  ◄─── Catalog loading
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── product.rs  ◄─── Product listing/lookup
//! │   └── cart.rs     ◄─── Cart and notification commands
//! ├── views/
//! │   ├── product_list.rs   ◄─── Product grid + selection
//! │   └── product_detail.rs ◄─── Detail overlay
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod views;

use std::sync::Arc;

use storefront_core::CartState;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use error::ApiError;
use state::{CatalogState, ConfigState, StoreContext};
use views::ProductListView;

/// A running storefront session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load catalog ──► built-in, or JSON from config.catalog_path         │
/// │  2. Open StoreContext ──► empty cart, fresh session id                  │
/// │  3. Hand out views ──► each gets the shared catalog + config            │
/// │                                                                         │
/// │  shutdown() closes the store; commands then fail fast.                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct Storefront {
    config: Arc<ConfigState>,
    catalog: CatalogState,
    store: StoreContext,
    session_id: Uuid,
}

impl Storefront {
    pub fn start(config: ConfigState) -> Result<Self, ApiError> {
        let catalog = CatalogState::load(&config)?;
        let store = StoreContext::new();
        let session_id = store.open()?;

        info!(
            %session_id,
            store_name = %config.store_name,
            products = catalog.inner().len(),
            "Storefront started"
        );

        Ok(Storefront {
            config: Arc::new(config),
            catalog,
            store,
            session_id,
        })
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// Store handle; clone it to share with other views.
    pub fn store(&self) -> &StoreContext {
        &self.store
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn product_list(&self) -> ProductListView {
        ProductListView::new(self.catalog.shared(), Arc::clone(&self.config))
    }

    /// Ends the session and returns the cart as it was at close.
    pub fn shutdown(&self) -> Result<Option<CartState>, ApiError> {
        info!(session_id = %self.session_id, "Storefront shutting down");
        self.store.close()
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, DEBUG for the app layer
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront_app=debug"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Runs a short headless session and prints what a renderer would draw.
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    let storefront = Storefront::start(ConfigState::from_env())?;
    let ctx = storefront.store().clone();
    let config = storefront.config();
    let mut list = storefront.product_list();

    println!("{}", config.store_name);
    for card in list.cards() {
        println!("  #{:<3} {:<24} {:>14}", card.id.0, card.name, card.display_price);
    }

    let Some(first) = list.cards().first().map(|card| card.id) else {
        println!("(catalog is empty)");
        storefront.shutdown()?;
        return Ok(());
    };

    list.add_to_cart(&ctx, first)?;
    let detail = list.select_product(first)?;
    detail.add_to_cart(&ctx, config)?;
    list.close_detail();
    commands::cart::decrement_quantity(&ctx, config, first)?;
    let cart = commands::cart::increment_quantity(&ctx, config, first)?;

    println!();
    for line in &cart.items {
        println!(
            "  {:<24} x{:<3} {:>14}",
            line.name, line.quantity, line.display_line_total
        );
    }
    println!("  Total {:>36}", cart.display_total);
    if cart.notification.visible {
        println!("  [{:?}] {}", cart.notification.kind, cart.notification.message);
    }

    storefront.shutdown()?;
    Ok(())
}
