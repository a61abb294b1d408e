//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so it is shared behind
//! an `Arc` without a lock.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use storefront_core::{ExchangeRate, Money};
use tracing::warn;

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the page header)
    pub store_name: String,

    /// Display currency code (ISO 4217)
    pub currency_code: String,

    /// Display currency symbol
    pub currency_symbol: String,

    /// Number of decimal places for the display currency
    pub currency_decimals: u8,

    /// Base → display conversion applied to every rendered price.
    /// Stored amounts and the cart total stay in the base currency.
    pub display_rate: ExchangeRate,

    /// JSON catalog to load instead of the built-in one
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Premium Collection"
    /// - Currency: INR (₹), 2 decimals
    /// - Rate: 83.16
    /// - Catalog: built-in
    fn default() -> Self {
        ConfigState {
            store_name: "Premium Collection".to_string(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
            display_rate: ExchangeRate::default(),
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_DISPLAY_RATE`: Override conversion factor (e.g., "83.16")
    /// - `STOREFRONT_CATALOG`: Path to a JSON catalog
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading through `lookup`.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(rate_str) = lookup("STOREFRONT_DISPLAY_RATE") {
            match rate_str.trim().parse::<f64>().map(ExchangeRate::from_factor) {
                Ok(rate) if rate.scaled() > 0 => config.display_rate = rate,
                _ => warn!(value = %rate_str, "Ignoring invalid STOREFRONT_DISPLAY_RATE"),
            }
        }

        if let Some(path) = lookup("STOREFRONT_CATALOG") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Formats a minor-unit amount as a display currency string.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_app::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "₹12.34");
    /// ```
    pub fn format_currency(&self, minor: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = minor / divisor;
        let frac = (minor % divisor).abs();

        format!(
            "{}{}{}",
            if minor < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }

    /// Converts a base-currency amount and formats it for display.
    ///
    /// Conversion yields hundredths of the display currency; those are
    /// rescaled to `currency_decimals` (half away from zero) before formatting.
    pub fn display_price(&self, amount: Money) -> String {
        let hundredths = amount.convert(self.display_rate).cents();
        self.format_currency(rescale_hundredths(hundredths, self.currency_decimals))
    }
}

/// Moves an amount in hundredths to `decimals` minor digits.
fn rescale_hundredths(hundredths: i64, decimals: u8) -> i64 {
    match decimals {
        2 => hundredths,
        0 | 1 => {
            let divisor = 10_i64.pow(2 - decimals as u32);
            let rounded = (hundredths.abs() + divisor / 2) / divisor;
            if hundredths < 0 {
                -rounded
            } else {
                rounded
            }
        }
        _ => hundredths * 10_i64.pow(decimals as u32 - 2),
    }
}
