//! # Cart State Machine
//!
//! The cart is a reducer: `(CartState, CartAction) → CartState`. Every
//! transition builds a fresh state and recomputes the total from scratch.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Action               Line present?        Effect                       │
//! │  ───────────────────  ───────────────────  ───────────────────────────  │
//! │  AddToCart(p)         yes                  quantity += 1                │
//! │                       no                   append {p, quantity: 1}      │
//! │  RemoveFromCart(id)   yes                  drop the line                │
//! │                       no                   unchanged                    │
//! │  IncrementQuantity    yes                  quantity += 1                │
//! │                       no                   unchanged                    │
//! │  DecrementQuantity    yes, quantity > 1    quantity -= 1                │
//! │                       yes, quantity == 1   unchanged (floor at 1)       │
//! │                       no                   unchanged                    │
//! │  ClearCart            -                    {items: [], total: 0}        │
//! │                                                                         │
//! │  After every action: total = Σ price × quantity (full fold)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`transition`] also returns a [`CartEvent`] describing what actually
//! happened. The store derives its notification from that event rather
//! than from a lookup against the previous state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::notification::{Notification, NotificationKind, Notifier};
use crate::types::{CartLineItem, Product, ProductId};

// =============================================================================
// Cart State
// =============================================================================

/// Snapshot of the cart.
///
/// ## Invariants
/// - `items` is in insertion order, at most one line per product id
/// - every line has `quantity >= 1`
/// - `total == Σ item.price × item.quantity`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartState {
    pub items: Vec<CartLineItem>,
    pub total: Money,
}

impl CartState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a state from lines, deriving the total.
    fn from_items(items: Vec<CartLineItem>) -> Self {
        let total = calculate_total(&items);
        CartState { items, total }
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| item.quantity as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Full fold over the lines. Never patched incrementally.
pub fn calculate_total(items: &[CartLineItem]) -> Money {
    items.iter().map(CartLineItem::line_total).sum()
}

// =============================================================================
// Actions & Events
// =============================================================================

/// A requested cart mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    AddToCart(Product),
    RemoveFromCart(ProductId),
    IncrementQuantity(ProductId),
    DecrementQuantity(ProductId),
    ClearCart,
}

impl CartAction {
    /// Operation name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::AddToCart(_) => "add_to_cart",
            CartAction::RemoveFromCart(_) => "remove_from_cart",
            CartAction::IncrementQuantity(_) => "increment_quantity",
            CartAction::DecrementQuantity(_) => "decrement_quantity",
            CartAction::ClearCart => "clear_cart",
        }
    }
}

/// What a transition actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A new line was appended.
    Added { name: String },
    /// An existing line went up by one through `AddToCart`.
    AddedAnother { name: String },
    Removed { name: String },
    Incremented { name: String },
    Decremented { name: String },
    Cleared,
    /// The action matched nothing, or hit the quantity floor.
    Unchanged,
}

impl CartEvent {
    /// The message a shopper sees for this event, if any.
    pub fn notification(&self) -> Option<(String, NotificationKind)> {
        match self {
            CartEvent::Added { name } => Some((
                format!("{} added to your cart!", name),
                NotificationKind::Success,
            )),
            CartEvent::AddedAnother { name } | CartEvent::Incremented { name } => Some((
                format!("Added another {} to your cart!", name),
                NotificationKind::Success,
            )),
            CartEvent::Removed { name } => Some((
                format!("{} removed from your cart", name),
                NotificationKind::Info,
            )),
            CartEvent::Decremented { name } => Some((
                format!("Reduced {} quantity", name),
                NotificationKind::Info,
            )),
            CartEvent::Cleared => Some((
                "Your cart has been cleared".to_string(),
                NotificationKind::Info,
            )),
            CartEvent::Unchanged => None,
        }
    }

    pub fn changed(&self) -> bool {
        !matches!(self, CartEvent::Unchanged)
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Pure state transition.
pub fn reduce(state: &CartState, action: &CartAction) -> CartState {
    transition(state, action).0
}

/// Pure state transition that also reports what happened.
pub fn transition(state: &CartState, action: &CartAction) -> (CartState, CartEvent) {
    match action {
        CartAction::AddToCart(product) => {
            let mut items = state.items.clone();
            let event = match items.iter().position(|item| item.id() == product.id) {
                Some(index) => {
                    let item = &mut items[index];
                    item.quantity = item.quantity.saturating_add(1);
                    CartEvent::AddedAnother {
                        name: product.name.clone(),
                    }
                }
                None => {
                    items.push(CartLineItem::new(product.clone()));
                    CartEvent::Added {
                        name: product.name.clone(),
                    }
                }
            };
            (CartState::from_items(items), event)
        }

        CartAction::RemoveFromCart(id) => {
            let Some(removed) = state.line(*id) else {
                return (state.clone(), CartEvent::Unchanged);
            };
            let event = CartEvent::Removed {
                name: removed.name().to_string(),
            };
            let items = state
                .items
                .iter()
                .filter(|item| item.id() != *id)
                .cloned()
                .collect();
            (CartState::from_items(items), event)
        }

        CartAction::IncrementQuantity(id) => {
            let mut items = state.items.clone();
            let event = match items.iter_mut().find(|item| item.id() == *id) {
                Some(item) => {
                    item.quantity = item.quantity.saturating_add(1);
                    CartEvent::Incremented {
                        name: item.name().to_string(),
                    }
                }
                None => CartEvent::Unchanged,
            };
            (CartState::from_items(items), event)
        }

        CartAction::DecrementQuantity(id) => {
            let mut items = state.items.clone();
            let event = match items.iter_mut().find(|item| item.id() == *id) {
                Some(item) if item.quantity > 1 => {
                    item.quantity -= 1;
                    CartEvent::Decremented {
                        name: item.name().to_string(),
                    }
                }
                _ => CartEvent::Unchanged,
            };
            (CartState::from_items(items), event)
        }

        CartAction::ClearCart => (CartState::empty(), CartEvent::Cleared),
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// Holds the current cart and its notification slot for one session.
///
/// Each operation replaces the held state with the reducer's output and
/// then updates the notification from the resulting [`CartEvent`].
#[derive(Debug, Clone)]
pub struct CartStore {
    state: CartState,
    notifier: Notifier,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        CartStore {
            state: CartState::empty(),
            notifier: Notifier::new(),
        }
    }

    /// Applies an action and returns what happened.
    pub fn dispatch(&mut self, action: CartAction) -> CartEvent {
        let (next, event) = transition(&self.state, &action);
        self.state = next;
        if let Some((message, kind)) = event.notification() {
            self.notifier.show(message, kind);
        }
        event
    }

    pub fn add_to_cart(&mut self, product: Product) -> CartEvent {
        self.dispatch(CartAction::AddToCart(product))
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> CartEvent {
        self.dispatch(CartAction::RemoveFromCart(id))
    }

    pub fn increment_quantity(&mut self, id: ProductId) -> CartEvent {
        self.dispatch(CartAction::IncrementQuantity(id))
    }

    pub fn decrement_quantity(&mut self, id: ProductId) -> CartEvent {
        self.dispatch(CartAction::DecrementQuantity(id))
    }

    pub fn clear_cart(&mut self) -> CartEvent {
        self.dispatch(CartAction::ClearCart)
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.state.items
    }

    pub fn total(&self) -> Money {
        self.state.total
    }

    pub fn item_count(&self) -> usize {
        self.state.item_count()
    }

    pub fn total_quantity(&self) -> u64 {
        self.state.total_quantity()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLineItem> {
        self.state.line(id)
    }

    pub fn notification(&self) -> &Notification {
        self.notifier.current()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifier.hide();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
