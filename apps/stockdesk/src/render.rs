//! # Output Rendering
//!
//! Plain-text tables for the terminal, or JSON when `--json` is set.
//! Amounts are formatted through [`ConfigState::format_money`] so the
//! configured currency symbol is used everywhere.

use serde::Serialize;

use stockdesk_core::{CatalogItem, LedgerTotals, LineDiscount, LineItem};

use crate::commands::document::{DocumentDetail, DocumentSummary};
use crate::commands::quote::QuoteResponse;
use crate::error::ApiError;
use crate::state::ConfigState;

pub fn json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::internal(format!("Failed to serialize output: {}", e)))
}

pub fn catalog(config: &ConfigState, items: &[CatalogItem]) -> String {
    let mut out = vec![format!(
        "{:<8} {:<12} {:<28} {:>10} {:<5}",
        "ID", "SKU", "NAME", "PRICE", "UNIT"
    )];
    for item in items {
        out.push(format!(
            "{:<8} {:<12} {:<28} {:>10} {:<5}{}",
            item.id,
            item.sku,
            item.name,
            config.format_money(item.unit_price),
            item.unit,
            if item.is_active { "" } else { " (inactive)" }
        ));
    }
    out.join("\n")
}

pub fn document_list(config: &ConfigState, documents: &[DocumentSummary]) -> String {
    if documents.is_empty() {
        return "No documents.".to_string();
    }

    let mut out = vec![format!(
        "{:<10} {:<24} {:>5} {:>12}",
        "NUMBER", "PARTY", "LINES", "TOTAL"
    )];
    for summary in documents {
        out.push(format!(
            "{:<10} {:<24} {:>5} {:>12}",
            summary.number,
            summary.party,
            summary.totals.line_count,
            config.format_money(summary.totals.total)
        ));
    }
    out.join("\n")
}

pub fn document_detail(config: &ConfigState, detail: &DocumentDetail) -> String {
    let document = &detail.document;
    let mut out = vec![
        config.company_name.clone(),
        format!("{} {}", document.kind(), document.number()),
        format!("{}: {}", capitalize(document.kind().party_label()), document.party()),
        String::new(),
    ];
    out.extend(lines_table(config, document.lines()));
    out.push(String::new());
    out.extend(totals_block(config, &detail.totals, document.tax_rate(), document.discount_rate()));
    out.join("\n")
}

pub fn quote(config: &ConfigState, response: &QuoteResponse) -> String {
    let mut out = lines_table(config, &response.lines);
    out.push(String::new());
    out.extend(totals_block(
        config,
        &response.totals,
        response.tax_rate,
        response.discount_rate,
    ));
    out.join("\n")
}

fn lines_table(config: &ConfigState, lines: &[LineItem]) -> Vec<String> {
    let mut out = vec![format!(
        "{:<32} {:>5} {:>10} {:>10} {:>12}",
        "DESCRIPTION", "QTY", "PRICE", "DISCOUNT", "AMOUNT"
    )];
    for line in lines {
        let discount = match &line.discount {
            Some(LineDiscount::Percent(rate)) => rate.to_string(),
            Some(LineDiscount::Amount(amount)) => config.format_money(*amount),
            None => String::new(),
        };
        let description = if line.description.is_empty() {
            "(no description)"
        } else {
            line.description.as_str()
        };
        out.push(format!(
            "{:<32} {:>5} {:>10} {:>10} {:>12}",
            description,
            line.quantity,
            config.format_money(line.unit_price),
            discount,
            config.format_money(line.extension())
        ));
    }
    out
}

fn totals_block(
    config: &ConfigState,
    totals: &LedgerTotals,
    tax_rate: stockdesk_core::Rate,
    discount_rate: stockdesk_core::Rate,
) -> Vec<String> {
    vec![
        format!("{:>58} {:>12}", "Subtotal", config.format_money(totals.subtotal)),
        format!(
            "{:>58} {:>12}",
            format!("Tax ({})", tax_rate),
            config.format_money(totals.tax_amount)
        ),
        format!(
            "{:>58} {:>12}",
            format!("Discount ({})", discount_rate),
            format!("-{}", config.format_money(totals.discount_amount))
        ),
        format!("{:>58} {:>12}", "Total", config.format_money(totals.total)),
    ]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{document, quote as quote_cmd};
    use stockdesk_core::DocumentKind;
    use stockdesk_store::Store;

    #[test]
    fn test_document_detail_text() {
        let store = Store::seeded().unwrap();
        let config = ConfigState::default();
        let detail = document::get_document(&store, DocumentKind::Invoice, "INV-1001").unwrap();
        let text = document_detail(&config, &detail);
        assert!(text.contains("INV-1001"));
        assert!(text.contains("Customer: Northwind Traders"));
        assert!(text.contains("$1489.40"));
    }

    #[test]
    fn test_quote_text_uses_currency_symbol() {
        let config = ConfigState {
            currency_symbol: "€".to_string(),
            ..ConfigState::default()
        };
        let response = quote_cmd::quote(&config, &["2x10".to_string()], Some("0"), None).unwrap();
        let text = quote(&config, &response);
        assert!(text.contains("€20.00"));
        assert!(text.contains("Total"));
    }

    #[test]
    fn test_json_output() {
        let store = Store::seeded().unwrap();
        let summaries = document::list_documents(&store, DocumentKind::SalesOrder).unwrap();
        let out = json(&summaries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["number"], "SO-3001");
        assert_eq!(value[0]["kind"], "sales_order");
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(document_list(&ConfigState::default(), &[]), "No documents.");
    }
}
