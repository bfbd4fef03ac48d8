//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKDESK_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use stockdesk_core::validation::coerce_rate;
use stockdesk_core::{Money, Rate};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Company name (printed on document headers)
    pub company_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Tax rate a new document starts with
    pub default_tax_rate: Rate,

    /// Document discount rate a new document starts with
    pub default_discount_rate: Rate,
}

impl Default for ConfigState {
    /// Development defaults: USD, 10% tax, no discount.
    fn default() -> Self {
        ConfigState {
            company_name: "Stockdesk Demo Co.".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            default_tax_rate: Rate::from_percent(10),
            default_discount_rate: Rate::zero(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKDESK_COMPANY_NAME`: Override company name
    /// - `STOCKDESK_CURRENCY_SYMBOL`: Override currency symbol
    /// - `STOCKDESK_TAX_RATE`: Default tax rate in percent (e.g., "8.25")
    /// - `STOCKDESK_DISCOUNT_RATE`: Default discount rate in percent
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("STOCKDESK_COMPANY_NAME") {
            config.company_name = name;
        }

        if let Some(symbol) = lookup("STOCKDESK_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(rate) = lookup("STOCKDESK_TAX_RATE") {
            config.default_tax_rate = coerce_rate(&rate).capped();
        }

        if let Some(rate) = lookup("STOCKDESK_DISCOUNT_RATE") {
            config.default_discount_rate = coerce_rate(&rate).capped();
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// Amounts are always held in cents, so two decimal places are shown.
    ///
    /// ## Example
    /// ```rust
    /// use stockdesk_app::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let magnitude = cents.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            magnitude / 100,
            magnitude % 100
        )
    }

    pub fn format_money(&self, money: Money) -> String {
        self.format_currency(money.cents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
        assert_eq!(config.format_currency(-5), "-$0.05");
        assert_eq!(config.format_currency(i64::MIN), "-$92233720368547758.08");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let env: HashMap<&str, &str> = [
            ("STOCKDESK_COMPANY_NAME", "Acme"),
            ("STOCKDESK_CURRENCY_SYMBOL", "€"),
            ("STOCKDESK_TAX_RATE", "8.25"),
            ("STOCKDESK_DISCOUNT_RATE", "not a number"),
        ]
        .into_iter()
        .collect();

        let config = ConfigState::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.company_name, "Acme");
        assert_eq!(config.default_tax_rate.bps(), 825);
        assert!(config.default_discount_rate.is_zero());
        assert_eq!(config.format_currency(500), "€5.00");
    }

    #[test]
    fn test_from_lookup_caps_rates() {
        let config = ConfigState::from_lookup(|k| {
            (k == "STOCKDESK_TAX_RATE").then(|| "250".to_string())
        });
        assert_eq!(config.default_tax_rate.bps(), 10_000);
    }
}
