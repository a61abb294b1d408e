//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Product      │   │  CartLineItem   │   │  ExchangeRate   │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id             │──►│  product fields │   │  scaled (u32)   │        │
//! │  │  name           │   │  quantity ≥ 1   │   │  831600 = 83.16 │        │
//! │  │  price (Money)  │   └─────────────────┘   └─────────────────┘        │
//! │  │  description    │                                                    │
//! │  │  image          │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Exchange Rate
// =============================================================================

/// Conversion factor from the base currency to the display currency.
///
/// ## Why Scaled Integers?
/// The factor is stored ×10000 so conversion stays in integer math,
/// the same way a tax rate is kept in basis points.
/// 831600 = 83.16 (USD → INR in the storefront's price list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExchangeRate(u32);

impl ExchangeRate {
    /// Fixed-point scale of the stored factor.
    pub const SCALE: u32 = 10_000;

    #[inline]
    pub const fn from_scaled(scaled: u32) -> Self {
        ExchangeRate(scaled)
    }

    /// Creates a rate from a decimal factor (for config parsing).
    pub fn from_factor(factor: f64) -> Self {
        ExchangeRate((factor * Self::SCALE as f64).round() as u32)
    }

    #[inline]
    pub const fn scaled(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a decimal factor (for display only).
    #[inline]
    pub fn factor(&self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        ExchangeRate(crate::DEFAULT_DISPLAY_RATE)
    }
}

// =============================================================================
// Product
// =============================================================================

/// Catalog identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id)
    }
}

/// A product listed in the catalog.
///
/// Catalog records are immutable once loaded; the cart copies the fields it
/// needs into a [`CartLineItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    /// Display name shown on cards, the detail overlay and notifications.
    pub name: String,

    /// Price in the base currency.
    #[serde(rename = "priceCents")]
    pub price: Money,

    pub description: String,

    /// Image URI.
    pub image: String,
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// A product plus the quantity of it currently in the cart.
///
/// ## Invariant
/// `quantity >= 1`. A line reaches zero only by being removed outright;
/// decrementing floors at one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    /// Starts a new line with quantity 1.
    pub fn new(product: Product) -> Self {
        CartLineItem {
            product,
            quantity: 1,
        }
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
