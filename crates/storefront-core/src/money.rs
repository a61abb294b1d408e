//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing float prices depends on the order of the additions:            │
//! │    (0.1 + 0.2) + 0.3 = 0.6000000000000001                               │
//! │    0.1 + (0.2 + 0.3) = 0.6                                              │
//! │                                                                         │
//! │  A cart total recomputed after every mutation must never drift, so a    │
//! │  float total would make "total == Σ price × qty" order dependent.       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    12999 + 2999 = 15998 cents, in any order                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(12999); // $129.99
//! let line = price * 2;                 // $259.98
//! assert_eq!(line.cents(), 25998);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use ts_rs::TS;

use crate::types::ExchangeRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest unit of the base currency (cents).
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Product.price ──► CartLineItem.line_total ──► CartState.total          │
/// │        │                                                                │
/// │        └──► convert(ExchangeRate) ──► "₹10809.97" (display only)        │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a line quantity.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Converts this amount into the display currency.
    ///
    /// The result is in minor units of the display currency. Rounding is
    /// half-up on the fourth decimal of the scaled product:
    /// `(cents * rate + 5000) / 10000`.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::ExchangeRate;
    ///
    /// let price = Money::from_cents(12999);          // $129.99
    /// let rate = ExchangeRate::from_scaled(831_600); // × 83.16
    ///
    /// // 129.99 × 83.16 = 10809.9684 → 10809.97
    /// assert_eq!(price.convert(rate).cents(), 1_080_997);
    /// ```
    pub fn convert(&self, rate: ExchangeRate) -> Money {
        // i128 keeps large catalogs from overflowing during the multiply
        let scaled = self.0 as i128 * rate.scaled() as i128;
        Money::from_cents(((scaled + 5000) / ExchangeRate::SCALE as i128) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Base-currency rendering, for logs and debugging.
///
/// Storefront screens render the converted amount through the app config.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Folding line totals into a cart total.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_sum_is_order_independent() {
        let prices = [Money::from_cents(10), Money::from_cents(20), Money::from_cents(30)];
        let forward: Money = prices.iter().copied().sum();
        let backward: Money = prices.iter().rev().copied().sum();
        assert_eq!(forward, backward);
        assert_eq!(forward.cents(), 60);
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: Money = std::iter::empty().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_convert_rounds_half_up() {
        let rate = ExchangeRate::from_scaled(831_600);

        // 1.00 × 83.16 = 83.16
        assert_eq!(Money::from_cents(100).convert(rate).cents(), 8316);
        // 0.01 × 83.16 = 0.8316 → 0.83
        assert_eq!(Money::from_cents(1).convert(rate).cents(), 83);
        // 24.99 × 83.16 = 2078.1684 → 2078.17
        assert_eq!(Money::from_cents(2499).convert(rate).cents(), 207_817);
    }

    #[test]
    fn test_convert_identity_rate() {
        let rate = ExchangeRate::from_scaled(ExchangeRate::SCALE);
        assert_eq!(Money::from_cents(4321).convert(rate).cents(), 4321);
    }
}
