//! # State Module
//!
//! Session state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐       │
//! │  │  StoreContext    │  │  CatalogState    │  │   ConfigState    │       │
//! │  │                  │  │                  │  │                  │       │
//! │  │  Arc<Mutex<      │  │  Arc<Catalog>    │  │  currency        │       │
//! │  │   Option<Cart    │  │  (read-only)     │  │  display rate    │       │
//! │  │   Store>>>       │  │                  │  │  catalog path    │       │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘       │
//! │                                                                         │
//! │  • StoreContext: opened once per session, closed at session end         │
//! │  • CatalogState: loaded once at startup                                 │
//! │  • ConfigState: read-only after initialization                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod store;

pub use catalog::{CatalogLoadError, CatalogState};
pub use config::ConfigState;
pub use store::StoreContext;
