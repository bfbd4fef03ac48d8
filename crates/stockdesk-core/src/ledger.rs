//! # Line-Item Ledger
//!
//! The ordered collection of lines behind every invoice, purchase order and
//! sales order form, and the totals derived from it.
//!
//! ## Recompute Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  add_item / update_item / remove_item      (form edits)                 │
//! │            │                                                            │
//! │            ▼                                                            │
//! │  items: Vec<LineItem>   ── insertion order = display order              │
//! │            │                                                            │
//! │            ▼                                                            │
//! │  compute_totals(tax_rate, discount_rate)   (pure, any time)             │
//! │            │                                                            │
//! │            ▼                                                            │
//! │  subtotal        = Σ quantity × unit_price − line discount              │
//! │  tax_amount      = subtotal × tax_rate                                  │
//! │  discount_amount = subtotal × discount_rate                             │
//! │  total           = subtotal + tax_amount − discount_amount              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity and price are clamped into `0..=MAX_LINE_QUANTITY` and
//! `0..=MAX_UNIT_PRICE` on the way in, and money arithmetic saturates, so
//! the subtotal is never negative. The ledger does no catalog lookups; see
//! [`crate::enrichment`] for that.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::money::{Money, Rate};
use crate::types::{LineDiscount, LineId, LineItem};

// =============================================================================
// Totals
// =============================================================================

/// Derived totals of a ledger. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub tax_amount: Money,
    pub discount_amount: Money,
    pub total: Money,
}

// =============================================================================
// Field Updates
// =============================================================================

/// One field of one line, as edited in a form row.
#[derive(Debug, Clone, PartialEq)]
pub enum LineField {
    Description(String),
    /// Sets the catalog reference only; prices are filled by
    /// [`crate::enrichment::apply_catalog_item`].
    CatalogItem(Option<String>),
    Quantity(i64),
    UnitPrice(Money),
    Discount(Option<LineDiscount>),
}

// =============================================================================
// Ledger
// =============================================================================

/// Lines of the document currently being edited.
///
/// Owned by exactly one editor for the lifetime of a dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemLedger {
    items: Vec<LineItem>,
}

impl LineItemLedger {
    pub fn new() -> Self {
        LineItemLedger { items: Vec::new() }
    }

    /// Seeds a ledger from an existing document's lines.
    ///
    /// Lines pass through [`add_item`](Self::add_item), so they are clamped
    /// and duplicate ids are replaced.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut ledger = LineItemLedger::new();
        for item in items {
            ledger.add_item(item);
        }
        ledger
    }

    /// Appends a line and returns the id it is stored under.
    ///
    /// Never fails. Negative quantity or price become zero; an id already
    /// present in the ledger is swapped for a fresh one.
    pub fn add_item(&mut self, item: LineItem) -> LineId {
        let mut item = item.normalized();
        if self.position(&item.id).is_some() {
            let fresh = LineId::generate();
            debug!(duplicate = %item.id, replacement = %fresh, "Line id already in ledger");
            item.id = fresh;
        }
        debug!(line_id = %item.id, quantity = item.quantity, unit_price = item.unit_price.cents(), "Adding line");
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// Appends one unit at zero price.
    pub fn add_blank(&mut self) -> LineId {
        self.add_item(LineItem::blank())
    }

    /// Removes the line if present. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &LineId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                debug!(line_id = %id, "Removed line");
                true
            }
            None => false,
        }
    }

    /// Replaces one field of one line. Unknown ids are ignored.
    pub fn update_item(&mut self, id: &LineId, field: LineField) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == id) else {
            debug!(line_id = %id, "Update for unknown line ignored");
            return false;
        };

        match field {
            LineField::Description(description) => item.description = description,
            LineField::CatalogItem(catalog_item_id) => item.catalog_item_id = catalog_item_id,
            LineField::Quantity(quantity) => item.quantity = LineItem::clamp_quantity(quantity),
            LineField::UnitPrice(price) => item.unit_price = LineItem::clamp_unit_price(price),
            LineField::Discount(discount) => item.discount = discount.map(LineDiscount::normalized),
        }
        debug!(line_id = %id, "Updated line");
        true
    }

    /// Computes totals for the current lines.
    ///
    /// Pure and idempotent; an empty ledger yields all-zero totals.
    ///
    /// ```rust
    /// use stockdesk_core::ledger::LineItemLedger;
    /// use stockdesk_core::money::{Money, Rate};
    /// use stockdesk_core::types::LineItem;
    ///
    /// let mut ledger = LineItemLedger::new();
    /// ledger.add_item(LineItem::new(2, Money::from_cents(1000)));
    /// ledger.add_item(LineItem::new(1, Money::from_cents(500)));
    ///
    /// let totals = ledger.compute_totals(Rate::from_percent(10), Rate::zero());
    /// assert_eq!(totals.subtotal.cents(), 2500);
    /// assert_eq!(totals.tax_amount.cents(), 250);
    /// assert_eq!(totals.total.cents(), 2750);
    /// ```
    pub fn compute_totals(&self, tax_rate: Rate, discount_rate: Rate) -> LedgerTotals {
        let subtotal: Money = self.items.iter().map(LineItem::extension).sum();
        let tax_amount = subtotal.percentage_of(tax_rate);
        let discount_amount = subtotal.percentage_of(discount_rate);

        LedgerTotals {
            line_count: self.items.len(),
            total_quantity: self
                .items
                .iter()
                .fold(0_i64, |acc, i| acc.saturating_add(i.quantity)),
            subtotal,
            tax_amount,
            discount_amount,
            total: subtotal + tax_amount - discount_amount,
        }
    }

    pub fn get(&self, id: &LineId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Lines in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &LineId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::FULL_RATE_BPS;
    use crate::{MAX_LINE_QUANTITY, MAX_UNIT_PRICE};

    fn sample_ledger() -> LineItemLedger {
        let mut ledger = LineItemLedger::new();
        ledger.add_item(LineItem::new(2, Money::from_cents(1000)).with_id("a"));
        ledger.add_item(LineItem::new(1, Money::from_cents(500)).with_id("b"));
        ledger
    }

    #[test]
    fn test_tax_example() {
        let totals = sample_ledger().compute_totals(Rate::from_percent(10), Rate::zero());
        assert_eq!(totals.subtotal.cents(), 2500);
        assert_eq!(totals.tax_amount.cents(), 250);
        assert!(totals.discount_amount.is_zero());
        assert_eq!(totals.total.cents(), 2750);
    }

    #[test]
    fn test_discount_example() {
        let totals = sample_ledger().compute_totals(Rate::zero(), Rate::from_percent(20));
        assert_eq!(totals.discount_amount.cents(), 500);
        assert_eq!(totals.total.cents(), 2000);
    }

    #[test]
    fn test_zero_rates_total_equals_subtotal() {
        let mut ledger = sample_ledger();
        ledger.add_item(LineItem::new(7, Money::from_cents(333)));
        let totals = ledger.compute_totals(Rate::zero(), Rate::zero());
        assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn test_empty_ledger_is_all_zero_for_any_rate() {
        let ledger = LineItemLedger::new();
        for (tax, discount) in [(0, 0), (825, 0), (0, 5000), (10_000, 10_000)] {
            let totals = ledger.compute_totals(Rate::from_bps(tax), Rate::from_bps(discount));
            assert_eq!(totals, LedgerTotals::default());
        }
    }

    #[test]
    fn test_subtotal_invariant_under_reordering() {
        let lines = vec![
            LineItem::new(2, Money::from_cents(1000)),
            LineItem::new(1, Money::from_cents(500)),
            LineItem::new(3, Money::from_cents(129)),
        ];
        let mut reversed = lines.clone();
        reversed.reverse();

        let forward = LineItemLedger::from_items(lines).compute_totals(Rate::zero(), Rate::zero());
        let backward = LineItemLedger::from_items(reversed).compute_totals(Rate::zero(), Rate::zero());
        assert_eq!(forward.subtotal, backward.subtotal);
    }

    #[test]
    fn test_add_then_remove_restores_totals() {
        let mut ledger = sample_ledger();
        let tax = Rate::from_bps(825);
        let discount = Rate::from_percent(5);
        let before = ledger.compute_totals(tax, discount);

        let id = ledger.add_item(LineItem::new(4, Money::from_cents(1999)));
        assert_ne!(ledger.compute_totals(tax, discount), before);

        assert!(ledger.remove_item(&id));
        assert_eq!(ledger.compute_totals(tax, discount), before);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut ledger = sample_ledger();
        let before = ledger.clone();
        assert!(!ledger.update_item(&LineId::from("missing"), LineField::Quantity(50)));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut ledger = sample_ledger();
        assert!(!ledger.remove_item(&LineId::from("missing")));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_negative_inputs_are_clamped() {
        let mut ledger = LineItemLedger::new();
        let id = ledger.add_item(LineItem::new(-3, Money::from_cents(-500)));
        let line = ledger.get(&id).unwrap();
        assert_eq!(line.quantity, 0);
        assert!(line.unit_price.is_zero());

        ledger.update_item(&id, LineField::Quantity(2));
        ledger.update_item(&id, LineField::UnitPrice(Money::from_cents(-1)));
        assert!(ledger.compute_totals(Rate::zero(), Rate::zero()).subtotal.is_zero());

        ledger.update_item(&id, LineField::UnitPrice(Money::from_cents(150)));
        ledger.update_item(&id, LineField::Quantity(-9));
        assert!(ledger.compute_totals(Rate::zero(), Rate::zero()).subtotal.is_zero());
    }

    #[test]
    fn test_update_fields() {
        let mut ledger = sample_ledger();
        let id = LineId::from("a");
        ledger.update_item(&id, LineField::Description("Widget".to_string()));
        ledger.update_item(&id, LineField::CatalogItem(Some("cat-1".to_string())));
        ledger.update_item(&id, LineField::Quantity(5));
        ledger.update_item(
            &id,
            LineField::Discount(Some(LineDiscount::Percent(Rate::from_percent(10)))),
        );

        let line = ledger.get(&id).unwrap();
        assert_eq!(line.description, "Widget");
        assert_eq!(line.catalog_item_id.as_deref(), Some("cat-1"));
        // 5 × $10.00 − 10% = $45.00, plus $5.00 from line b
        assert_eq!(
            ledger.compute_totals(Rate::zero(), Rate::zero()).subtotal.cents(),
            5000
        );
    }

    #[test]
    fn test_line_discounts_reduce_subtotal_before_document_rates() {
        let mut ledger = LineItemLedger::new();
        ledger.add_item(
            LineItem::new(1, Money::from_cents(10_000))
                .with_discount(LineDiscount::Amount(Money::from_cents(2_000))),
        );
        let totals = ledger.compute_totals(Rate::from_percent(10), Rate::from_percent(10));
        assert_eq!(totals.subtotal.cents(), 8_000);
        assert_eq!(totals.tax_amount.cents(), 800);
        assert_eq!(totals.discount_amount.cents(), 800);
        assert_eq!(totals.total.cents(), 8_000);
    }

    #[test]
    fn test_duplicate_id_gets_fresh_id() {
        let mut ledger = sample_ledger();
        let id = ledger.add_item(LineItem::blank().with_id("a"));
        assert_ne!(id, LineId::from("a"));
        assert_eq!(ledger.len(), 3);
        assert!(ledger.get(&id).is_some());
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let mut ledger = sample_ledger();
        let c = ledger.add_blank();
        let ids: Vec<&LineId> = ledger.items().iter().map(|i| &i.id).collect();
        assert_eq!(ids, vec![&LineId::from("a"), &LineId::from("b"), &c]);
    }

    #[test]
    fn test_compute_totals_is_idempotent() {
        let ledger = sample_ledger();
        let first = ledger.compute_totals(Rate::from_bps(825), Rate::from_bps(150));
        let second = ledger.compute_totals(Rate::from_bps(825), Rate::from_bps(150));
        assert_eq!(first, second);
        assert_eq!(first.line_count, 2);
        assert_eq!(first.total_quantity, 3);
    }

    #[test]
    fn test_huge_inputs_are_clamped_to_line_limits() {
        let mut ledger = LineItemLedger::new();
        let id = ledger.add_item(LineItem::new(i64::MAX, Money::from_cents(i64::MAX)));

        let line = ledger.get(&id).unwrap();
        assert_eq!(line.quantity, MAX_LINE_QUANTITY);
        assert_eq!(line.unit_price, MAX_UNIT_PRICE);

        ledger.update_item(&id, LineField::Quantity(i64::MAX));
        ledger.update_item(&id, LineField::UnitPrice(Money::from_cents(i64::MAX)));
        let totals = ledger.compute_totals(Rate::zero(), Rate::zero());
        assert_eq!(
            totals.subtotal,
            MAX_UNIT_PRICE.multiply_quantity(MAX_LINE_QUANTITY)
        );
    }

    #[test]
    fn test_subtotal_of_many_maximal_lines_stays_non_negative() {
        let lines = (0..2_000)
            .map(|_| LineItem::new(MAX_LINE_QUANTITY, MAX_UNIT_PRICE))
            .collect();
        let totals = LineItemLedger::from_items(lines)
            .compute_totals(Rate::from_bps(FULL_RATE_BPS), Rate::zero());
        assert_eq!(totals.subtotal.cents(), i64::MAX);
        assert_eq!(totals.total.cents(), i64::MAX);
        assert_eq!(totals.total_quantity, 2_000 * MAX_LINE_QUANTITY);
    }
}
