//! # Store Context
//!
//! The explicitly passed handle through which every view reaches the
//! session's cart.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   StoreContext::new()        open()              close()                │
//! │   ┌──────────────┐      ┌──────────────┐      ┌──────────────┐          │
//! │   │   Closed     │ ───► │    Open      │ ───► │   Closed     │          │
//! │   │ (no store)   │      │ CartStore +  │      │ final state  │          │
//! │   └──────────────┘      │ session id   │      │ returned     │          │
//! │          │              └──────────────┘      └──────────────┘          │
//! │          │                     │                                        │
//! │          ▼                     ▼                                        │
//! │   with_store_mut()       with_store_mut()                               │
//! │   Err(StoreNotInitialized)   Ok(f(&mut store))                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! Handles are cheap clones of an `Arc<Mutex<..>>`, so the product list,
//! the detail overlay and the cart panel all see the same store. Every
//! operation holds the lock for its whole transition, so mutations are
//! serialized in the order they arrive.

use std::sync::{Arc, Mutex, MutexGuard};

use storefront_core::{CartState, CartStore, CoreError};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug)]
struct Session {
    id: Uuid,
    store: CartStore,
}

/// Shared handle to the session's cart store.
#[derive(Debug, Clone, Default)]
pub struct StoreContext {
    session: Arc<Mutex<Option<Session>>>,
}

impl StoreContext {
    /// Creates a closed context. Call [`StoreContext::open`] before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the session with an empty cart.
    ///
    /// Opening an already open context keeps the existing cart and returns
    /// its session id.
    pub fn open(&self) -> Result<Uuid, ApiError> {
        let mut session = self.lock()?;
        if let Some(existing) = session.as_ref() {
            warn!(session_id = %existing.id, "Store context already open");
            return Ok(existing.id);
        }

        let id = Uuid::new_v4();
        *session = Some(Session {
            id,
            store: CartStore::new(),
        });
        info!(session_id = %id, "Cart store opened");
        Ok(id)
    }

    /// Tears the session down and returns the cart as it was at close.
    pub fn close(&self) -> Result<Option<CartState>, ApiError> {
        let closed = self.lock()?.take();
        Ok(closed.map(|session| {
            info!(
                session_id = %session.id,
                items = session.store.item_count(),
                "Cart store closed"
            );
            session.store.state().clone()
        }))
    }

    pub fn is_open(&self) -> bool {
        self.lock().map(|session| session.is_some()).unwrap_or(false)
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.lock().ok().and_then(|session| session.as_ref().map(|s| s.id))
    }

    /// Runs `f` with read access to the store.
    ///
    /// `operation` names the caller in the error raised for a closed context.
    pub fn with_store<F, R>(&self, operation: &str, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&CartStore) -> R,
    {
        let session = self.lock()?;
        let session = session.as_ref().ok_or_else(|| not_open(operation))?;
        Ok(f(&session.store))
    }

    /// Runs `f` with write access to the store.
    pub fn with_store_mut<F, R>(&self, operation: &str, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut session = self.lock()?;
        let session = session.as_mut().ok_or_else(|| not_open(operation))?;
        Ok(f(&mut session.store))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<Session>>, ApiError> {
        self.session
            .lock()
            .map_err(|_| ApiError::internal("Cart store lock poisoned"))
    }
}

fn not_open(operation: &str) -> ApiError {
    ApiError::from(CoreError::StoreNotInitialized {
        operation: operation.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_core::{Money, Product, ProductId};

    fn product() -> Product {
        Product {
            id: ProductId(1),
            name: "Mug".to_string(),
            price: Money::from_cents(500),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_closed_context_fails_fast() {
        let ctx = StoreContext::new();
        assert!(!ctx.is_open());

        let err = ctx
            .with_store_mut("add_to_cart", |store| store.add_to_cart(product()))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StoreNotInitialized);
        assert!(err.message.contains("add_to_cart"));
    }

    #[test]
    fn test_open_then_mutate() {
        let ctx = StoreContext::new();
        let id = ctx.open().unwrap();
        assert_eq!(ctx.session_id(), Some(id));

        ctx.with_store_mut("add_to_cart", |store| store.add_to_cart(product()))
            .unwrap();
        let total = ctx.with_store("get_cart", |store| store.total()).unwrap();
        assert_eq!(total.cents(), 500);
    }

    #[test]
    fn test_clones_share_one_store() {
        let ctx = StoreContext::new();
        ctx.open().unwrap();
        let other = ctx.clone();

        other
            .with_store_mut("add_to_cart", |store| store.add_to_cart(product()))
            .unwrap();
        let count = ctx.with_store("get_cart", |store| store.item_count()).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_open_twice_keeps_cart() {
        let ctx = StoreContext::new();
        let first = ctx.open().unwrap();
        ctx.with_store_mut("add_to_cart", |store| store.add_to_cart(product()))
            .unwrap();

        let second = ctx.open().unwrap();
        assert_eq!(first, second);
        assert_eq!(ctx.with_store("get_cart", |s| s.item_count()).unwrap(), 1);
    }

    #[test]
    fn test_close_returns_final_state_and_resets() {
        let ctx = StoreContext::new();
        ctx.open().unwrap();
        ctx.with_store_mut("add_to_cart", |store| store.add_to_cart(product()))
            .unwrap();

        let final_state = ctx.close().unwrap().unwrap();
        assert_eq!(final_state.items.len(), 1);
        assert!(!ctx.is_open());
        assert!(ctx.close().unwrap().is_none());

        ctx.open().unwrap();
        assert!(ctx.with_store("get_cart", |s| s.is_empty()).unwrap());
    }
}
