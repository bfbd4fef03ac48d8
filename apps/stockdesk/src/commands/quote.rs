//! # Quote Command
//!
//! Totals for ad-hoc lines typed on the command line, without touching
//! the store.
//!
//! ## Line Syntax
//! ```text
//! QTY x PRICE [@ DISCOUNT]
//!
//!   2x10.00         two units at $10.00
//!   3x$4.50@10%     three units at $4.50, 10% off the line
//!   1x99@5.00       one unit at $99.00, $5.00 off the line
//! ```
//!
//! Each number goes through the same coercion as the editor's input
//! fields, so unparseable parts become 0 rather than errors.

use serde::Serialize;
use tracing::debug;

use stockdesk_core::validation::{coerce_money, coerce_quantity, coerce_rate, validate_rate};
use stockdesk_core::{LedgerTotals, LineDiscount, LineItem, LineItemLedger, Rate};

use crate::error::ApiError;
use crate::state::ConfigState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub lines: Vec<LineItem>,
    pub tax_rate: Rate,
    pub discount_rate: Rate,
    pub totals: LedgerTotals,
}

/// Parses one `QTYxPRICE[@DISCOUNT]` argument.
///
/// A discount ending in `%` is a percentage of the line; anything else is
/// an amount.
pub fn parse_line_arg(arg: &str) -> Result<LineItem, ApiError> {
    let (body, discount) = match arg.split_once('@') {
        Some((body, discount)) => (body, Some(discount.trim())),
        None => (arg, None),
    };

    let (quantity, price) = body
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| ApiError::validation(format!("expected QTYxPRICE, got '{}'", arg)))?;

    let mut line = LineItem::new(coerce_quantity(quantity), coerce_money(price));

    match discount {
        Some(d) if d.ends_with('%') => {
            line = line.with_discount(LineDiscount::Percent(coerce_rate(d).capped()));
        }
        Some(d) => {
            line = line.with_discount(LineDiscount::Amount(coerce_money(d)));
        }
        None => {}
    }

    Ok(line)
}

/// Computes totals for the given line arguments. Missing rates fall back
/// to the configured defaults.
pub fn quote(
    config: &ConfigState,
    line_args: &[String],
    tax_rate: Option<&str>,
    discount_rate: Option<&str>,
) -> Result<QuoteResponse, ApiError> {
    let tax_rate = tax_rate.map_or(config.default_tax_rate, coerce_rate);
    let discount_rate = discount_rate.map_or(config.default_discount_rate, coerce_rate);
    validate_rate("tax_rate", tax_rate)?;
    validate_rate("discount_rate", discount_rate)?;

    let mut ledger = LineItemLedger::new();
    for arg in line_args {
        ledger.add_item(parse_line_arg(arg)?);
    }
    debug!(lines = ledger.len(), %tax_rate, %discount_rate, "quote command");

    Ok(QuoteResponse {
        totals: ledger.compute_totals(tax_rate, discount_rate),
        lines: ledger.into_items(),
        tax_rate,
        discount_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockdesk_core::{Money, MAX_LINE_QUANTITY};

    fn args(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_plain_line() {
        let line = parse_line_arg("2x10.00").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price, Money::from_cents(1_000));
        assert!(line.discount.is_none());
    }

    #[test]
    fn test_parse_discounts() {
        let line = parse_line_arg("3X$4.50@10%").unwrap();
        assert_eq!(line.discount, Some(LineDiscount::Percent(Rate::from_percent(10))));

        let line = parse_line_arg("1x99@5").unwrap();
        assert_eq!(line.discount, Some(LineDiscount::Amount(Money::from_cents(500))));
    }

    #[test]
    fn test_parse_coerces_garbage_to_zero() {
        let line = parse_line_arg("-4xabc").unwrap();
        assert_eq!(line.quantity, 0);
        assert!(line.unit_price.is_zero());
    }

    #[test]
    fn test_parse_requires_separator() {
        let err = parse_line_arg("10.00").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_quote_totals() {
        let config = ConfigState::default();
        let response = quote(&config, &args(&["2x10", "1x5"]), None, Some("20")).unwrap();
        assert_eq!(response.totals.subtotal.cents(), 2_500);
        assert_eq!(response.totals.tax_amount.cents(), 250);
        assert_eq!(response.totals.discount_amount.cents(), 500);
        assert_eq!(response.totals.total.cents(), 2_250);
    }

    #[test]
    fn test_quote_zero_rates_total_equals_subtotal() {
        let config = ConfigState::default();
        let response = quote(&config, &args(&["3x1.99@10%"]), Some("0"), Some("0")).unwrap();
        assert_eq!(response.totals.total, response.totals.subtotal);
    }

    #[test]
    fn test_quote_huge_lines_are_clamped() {
        let config = ConfigState::default();
        let response =
            quote(&config, &args(&["99999999999999999x100"]), Some("0"), Some("0")).unwrap();
        assert_eq!(response.lines[0].quantity, MAX_LINE_QUANTITY);
        assert_eq!(response.totals.subtotal.cents(), MAX_LINE_QUANTITY * 10_000);

        let response = quote(
            &config,
            &args(&["9000000000000000000x0.01", "9000000000000000000x0.01"]),
            Some("0"),
            Some("0"),
        )
        .unwrap();
        assert_eq!(response.totals.subtotal.cents(), 2 * MAX_LINE_QUANTITY);
        assert_eq!(response.totals.total, response.totals.subtotal);
    }

    #[test]
    fn test_quote_rejects_rate_over_100() {
        let config = ConfigState::default();
        let err = quote(&config, &args(&["1x1"]), Some("120"), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
