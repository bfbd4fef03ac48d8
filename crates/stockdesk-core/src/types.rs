//! # Domain Types
//!
//! Line items, catalog items and the three commercial documents that carry
//! a line-item ledger.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐      ┌─────────────────────────────────────────┐  │
//! │  │  CatalogItem    │      │              Document                   │  │
//! │  │  ─────────────  │      │  ┌──────────┐ ┌────────────┐ ┌────────┐ │  │
//! │  │  id, sku        │ pre- │  │ Invoice  │ │ Purchase   │ │ Sales  │ │  │
//! │  │  name           │ fills│  │          │ │ Order      │ │ Order  │ │  │
//! │  │  unit_price ────┼─────►│  └────┬─────┘ └─────┬──────┘ └───┬────┘ │  │
//! │  └─────────────────┘      │       └─────── lines: Vec<LineItem> ┘    │  │
//! │                           │               tax_rate, discount_rate   │  │
//! │                           └─────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are never stored on a document; they are derived through
//! [`Document::totals`] every time they are needed.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::ledger::{LedgerTotals, LineItemLedger};
use crate::money::{Money, Rate};
use crate::{MAX_LINE_QUANTITY, MAX_UNIT_PRICE};

// =============================================================================
// Line Identity
// =============================================================================

/// Opaque identifier of a line within one ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineId(String);

impl LineId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        LineId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LineId {
    fn from(value: &str) -> Self {
        LineId(value.to_string())
    }
}

impl From<String> for LineId {
    fn from(value: String) -> Self {
        LineId(value)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Line Discount
// =============================================================================

/// A discount on a single line, applied before aggregation.
///
/// Which variant a line may carry depends on the document kind, see
/// [`DocumentKind::line_discount_policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LineDiscount {
    /// Fixed amount off the line, capped at the line's gross value.
    Amount(Money),
    /// Percentage of the line's gross value, capped at 100%.
    Percent(Rate),
}

impl LineDiscount {
    /// Amount taken off a line whose gross value is `gross`.
    pub fn amount_off(&self, gross: Money) -> Money {
        match self {
            LineDiscount::Amount(amount) => amount.clamp_non_negative().min(gross),
            LineDiscount::Percent(rate) => gross.percentage_of(rate.capped()),
        }
    }

    /// Same discount with negative amounts and >100% rates pulled into range.
    pub fn normalized(self) -> Self {
        match self {
            LineDiscount::Amount(amount) => LineDiscount::Amount(amount.clamp_non_negative()),
            LineDiscount::Percent(rate) => LineDiscount::Percent(rate.capped()),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of an invoice or order: a quantity of something at a unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: LineId,

    /// Catalog item this line was filled from, if any.
    pub catalog_item_id: Option<String>,

    pub description: String,

    /// Whole units, `0..=MAX_LINE_QUANTITY` once inside a ledger.
    pub quantity: i64,

    /// `0..=MAX_UNIT_PRICE` once inside a ledger.
    pub unit_price: Money,

    pub discount: Option<LineDiscount>,
}

impl LineItem {
    /// Creates a line with a fresh id and no description.
    pub fn new(quantity: i64, unit_price: Money) -> Self {
        LineItem {
            id: LineId::generate(),
            catalog_item_id: None,
            description: String::new(),
            quantity,
            unit_price,
            discount: None,
        }
    }

    /// The line a form shows when the user clicks "add item":
    /// one unit at zero price.
    pub fn blank() -> Self {
        LineItem::new(1, Money::zero())
    }

    pub fn with_id(mut self, id: impl Into<LineId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_discount(mut self, discount: LineDiscount) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_catalog_item(mut self, catalog_item_id: impl Into<String>) -> Self {
        self.catalog_item_id = Some(catalog_item_id.into());
        self
    }

    /// Pulls a quantity into `0..=MAX_LINE_QUANTITY`.
    pub fn clamp_quantity(quantity: i64) -> i64 {
        quantity.clamp(0, MAX_LINE_QUANTITY)
    }

    /// Pulls a unit price into `0..=MAX_UNIT_PRICE`.
    pub fn clamp_unit_price(price: Money) -> Money {
        price.clamp(Money::zero(), MAX_UNIT_PRICE)
    }

    /// Copy with quantity, price and discount pulled into their valid ranges.
    pub fn normalized(mut self) -> Self {
        self.quantity = Self::clamp_quantity(self.quantity);
        self.unit_price = Self::clamp_unit_price(self.unit_price);
        self.discount = self.discount.map(LineDiscount::normalized);
        self
    }

    /// `quantity × unit_price`, before any line discount.
    pub fn gross(&self) -> Money {
        Self::clamp_unit_price(self.unit_price)
            .multiply_quantity(Self::clamp_quantity(self.quantity))
    }

    /// Amount the line discount takes off [`gross`](Self::gross).
    pub fn discount_amount(&self) -> Money {
        self.discount
            .map(|d| d.amount_off(self.gross()))
            .unwrap_or_default()
    }

    /// The line's contribution to the subtotal.
    pub fn extension(&self) -> Money {
        self.gross() - self.discount_amount()
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A reference record that pre-fills a line when selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub unit_price: Money,
    /// Unit of measure shown next to quantities ("pcs", "box", "kg").
    pub unit: String,
    /// Inactive items stay resolvable for old documents but can't be
    /// picked for new lines.
    pub is_active: bool,
}

impl CatalogItem {
    /// Text copied into a line's description when the item is selected.
    pub fn line_description(&self) -> String {
        match &self.description {
            Some(description) if !description.trim().is_empty() => {
                format!("{} - {}", self.name, description)
            }
            _ => self.name.clone(),
        }
    }
}

// =============================================================================
// Document Kind
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Invoice,
    PurchaseOrder,
    SalesOrder,
}

/// Which per-line discount representation a document kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDiscountPolicy {
    /// Lines carry no discount; only the document-level rate applies.
    NotAllowed,
    /// Lines may carry [`LineDiscount::Percent`].
    PercentOnly,
    /// Lines may carry [`LineDiscount::Amount`].
    AmountOnly,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Invoice,
        DocumentKind::PurchaseOrder,
        DocumentKind::SalesOrder,
    ];

    /// Invoices bill what was agreed on the order, so their lines are net.
    /// Sales orders offer percentage promotions per line; purchase orders
    /// record supplier rebates as fixed amounts.
    pub const fn line_discount_policy(&self) -> LineDiscountPolicy {
        match self {
            DocumentKind::Invoice => LineDiscountPolicy::NotAllowed,
            DocumentKind::SalesOrder => LineDiscountPolicy::PercentOnly,
            DocumentKind::PurchaseOrder => LineDiscountPolicy::AmountOnly,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "invoice",
            DocumentKind::PurchaseOrder => "purchase_order",
            DocumentKind::SalesOrder => "sales_order",
        }
    }

    /// Label of the counterparty field ("customer" / "supplier").
    pub const fn party_label(&self) -> &'static str {
        match self {
            DocumentKind::PurchaseOrder => "supplier",
            DocumentKind::Invoice | DocumentKind::SalesOrder => "customer",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Statuses
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOrderStatus {
    #[default]
    Draft,
    Ordered,
    Received,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SalesOrderStatus {
    #[default]
    Draft,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

// =============================================================================
// Documents
// =============================================================================

/// A customer invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    /// Business number printed on the document ("INV-1001").
    pub number: String,
    pub customer: String,
    #[ts(as = "String")]
    pub issue_date: NaiveDate,
    #[ts(as = "Option<String>")]
    pub due_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
    pub lines: Vec<LineItem>,
    pub tax_rate: Rate,
    pub discount_rate: Rate,
}

impl Invoice {
    /// An empty draft with a fresh id.
    pub fn draft(number: impl Into<String>, customer: impl Into<String>, issue_date: NaiveDate) -> Self {
        Invoice {
            id: Uuid::new_v4().to_string(),
            number: number.into(),
            customer: customer.into(),
            issue_date,
            due_date: None,
            status: InvoiceStatus::Draft,
            notes: None,
            lines: Vec::new(),
            tax_rate: Rate::zero(),
            discount_rate: Rate::zero(),
        }
    }
}

/// An order placed with a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub number: String,
    pub supplier: String,
    #[ts(as = "String")]
    pub order_date: NaiveDate,
    /// When the goods are expected at the warehouse.
    #[ts(as = "Option<String>")]
    pub expected_date: Option<NaiveDate>,
    pub status: PurchaseOrderStatus,
    pub notes: Option<String>,
    pub lines: Vec<LineItem>,
    pub tax_rate: Rate,
    pub discount_rate: Rate,
}

impl PurchaseOrder {
    pub fn draft(number: impl Into<String>, supplier: impl Into<String>, order_date: NaiveDate) -> Self {
        PurchaseOrder {
            id: Uuid::new_v4().to_string(),
            number: number.into(),
            supplier: supplier.into(),
            order_date,
            expected_date: None,
            status: PurchaseOrderStatus::Draft,
            notes: None,
            lines: Vec::new(),
            tax_rate: Rate::zero(),
            discount_rate: Rate::zero(),
        }
    }
}

/// An order received from a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: String,
    pub number: String,
    pub customer: String,
    #[ts(as = "String")]
    pub order_date: NaiveDate,
    #[ts(as = "Option<String>")]
    pub delivery_date: Option<NaiveDate>,
    pub shipping_address: Option<String>,
    pub status: SalesOrderStatus,
    pub notes: Option<String>,
    pub lines: Vec<LineItem>,
    pub tax_rate: Rate,
    pub discount_rate: Rate,
}

impl SalesOrder {
    pub fn draft(number: impl Into<String>, customer: impl Into<String>, order_date: NaiveDate) -> Self {
        SalesOrder {
            id: Uuid::new_v4().to_string(),
            number: number.into(),
            customer: customer.into(),
            order_date,
            delivery_date: None,
            shipping_address: None,
            status: SalesOrderStatus::Draft,
            notes: None,
            lines: Vec::new(),
            tax_rate: Rate::zero(),
            discount_rate: Rate::zero(),
        }
    }
}

/// Any document that carries a line-item ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Document {
    Invoice(Invoice),
    PurchaseOrder(PurchaseOrder),
    SalesOrder(SalesOrder),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Invoice(_) => DocumentKind::Invoice,
            Document::PurchaseOrder(_) => DocumentKind::PurchaseOrder,
            Document::SalesOrder(_) => DocumentKind::SalesOrder,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Document::Invoice(d) => &d.id,
            Document::PurchaseOrder(d) => &d.id,
            Document::SalesOrder(d) => &d.id,
        }
    }

    pub fn number(&self) -> &str {
        match self {
            Document::Invoice(d) => &d.number,
            Document::PurchaseOrder(d) => &d.number,
            Document::SalesOrder(d) => &d.number,
        }
    }

    /// Customer or supplier name.
    pub fn party(&self) -> &str {
        match self {
            Document::Invoice(d) => &d.customer,
            Document::PurchaseOrder(d) => &d.supplier,
            Document::SalesOrder(d) => &d.customer,
        }
    }

    pub fn lines(&self) -> &[LineItem] {
        match self {
            Document::Invoice(d) => &d.lines,
            Document::PurchaseOrder(d) => &d.lines,
            Document::SalesOrder(d) => &d.lines,
        }
    }

    pub fn tax_rate(&self) -> Rate {
        match self {
            Document::Invoice(d) => d.tax_rate,
            Document::PurchaseOrder(d) => d.tax_rate,
            Document::SalesOrder(d) => d.tax_rate,
        }
    }

    pub fn discount_rate(&self) -> Rate {
        match self {
            Document::Invoice(d) => d.discount_rate,
            Document::PurchaseOrder(d) => d.discount_rate,
            Document::SalesOrder(d) => d.discount_rate,
        }
    }

    /// Replaces lines and rates, leaving the header untouched.
    pub fn set_pricing(&mut self, lines: Vec<LineItem>, tax_rate: Rate, discount_rate: Rate) {
        let (slot, tax, discount) = match self {
            Document::Invoice(d) => (&mut d.lines, &mut d.tax_rate, &mut d.discount_rate),
            Document::PurchaseOrder(d) => (&mut d.lines, &mut d.tax_rate, &mut d.discount_rate),
            Document::SalesOrder(d) => (&mut d.lines, &mut d.tax_rate, &mut d.discount_rate),
        };
        *slot = lines;
        *tax = tax_rate;
        *discount = discount_rate;
    }

    /// A ledger seeded with this document's lines.
    pub fn ledger(&self) -> LineItemLedger {
        LineItemLedger::from_items(self.lines().to_vec())
    }

    /// Totals derived from the current lines and rates.
    pub fn totals(&self) -> LedgerTotals {
        self.ledger()
            .compute_totals(self.tax_rate(), self.discount_rate())
    }
}

impl From<Invoice> for Document {
    fn from(value: Invoice) -> Self {
        Document::Invoice(value)
    }
}

impl From<PurchaseOrder> for Document {
    fn from(value: PurchaseOrder) -> Self {
        Document::PurchaseOrder(value)
    }
}

impl From<SalesOrder> for Document {
    fn from(value: SalesOrder) -> Self {
        Document::SalesOrder(value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_line_extension_without_discount() {
        let line = LineItem::new(3, Money::from_cents(299));
        assert_eq!(line.gross().cents(), 897);
        assert_eq!(line.extension().cents(), 897);
    }

    #[test]
    fn test_amount_discount_is_capped_at_gross() {
        let line = LineItem::new(1, Money::from_cents(500))
            .with_discount(LineDiscount::Amount(Money::from_cents(800)));
        assert_eq!(line.discount_amount().cents(), 500);
        assert!(line.extension().is_zero());
    }

    #[test]
    fn test_percent_discount() {
        let line = LineItem::new(2, Money::from_cents(1000))
            .with_discount(LineDiscount::Percent(Rate::from_percent(15)));
        assert_eq!(line.discount_amount().cents(), 300);
        assert_eq!(line.extension().cents(), 1700);
    }

    #[test]
    fn test_negative_inputs_never_produce_negative_extension() {
        let line = LineItem {
            quantity: -4,
            ..LineItem::new(0, Money::from_cents(-100))
        };
        assert!(line.extension().is_zero());
        let normalized = line.normalized();
        assert_eq!(normalized.quantity, 0);
        assert!(normalized.unit_price.is_zero());
    }

    #[test]
    fn test_line_discount_serializes_tagged() {
        let json = serde_json::to_string(&LineDiscount::Percent(Rate::from_bps(500))).unwrap();
        assert_eq!(json, r#"{"kind":"percent","value":500}"#);
    }

    #[test]
    fn test_catalog_line_description() {
        let mut item = CatalogItem {
            id: "c1".to_string(),
            sku: "BOLT-M8".to_string(),
            name: "M8 Bolt".to_string(),
            description: Some("Zinc plated, 40mm".to_string()),
            unit_price: Money::from_cents(35),
            unit: "pcs".to_string(),
            is_active: true,
        };
        assert_eq!(item.line_description(), "M8 Bolt - Zinc plated, 40mm");
        item.description = None;
        assert_eq!(item.line_description(), "M8 Bolt");
    }

    #[test]
    fn test_document_accessors_and_totals() {
        let mut invoice = Invoice::draft("INV-1001", "Acme Corp", date());
        invoice.lines.push(LineItem::new(2, Money::from_cents(1000)));
        invoice.lines.push(LineItem::new(1, Money::from_cents(500)));
        invoice.tax_rate = Rate::from_percent(10);

        let document = Document::from(invoice);
        assert_eq!(document.kind(), DocumentKind::Invoice);
        assert_eq!(document.number(), "INV-1001");
        assert_eq!(document.party(), "Acme Corp");
        assert_eq!(document.totals().total.cents(), 2750);
    }

    #[test]
    fn test_set_pricing_replaces_lines_and_rates() {
        let mut document = Document::from(PurchaseOrder::draft("PO-1", "Globex", date()));
        document.set_pricing(
            vec![LineItem::new(4, Money::from_cents(250))],
            Rate::from_percent(5),
            Rate::from_percent(2),
        );
        assert_eq!(document.lines().len(), 1);
        assert_eq!(document.tax_rate(), Rate::from_percent(5));
        assert_eq!(document.discount_rate(), Rate::from_percent(2));
    }

    #[test]
    fn test_discount_policy_per_kind() {
        assert_eq!(
            DocumentKind::Invoice.line_discount_policy(),
            LineDiscountPolicy::NotAllowed
        );
        assert_eq!(
            DocumentKind::SalesOrder.line_discount_policy(),
            LineDiscountPolicy::PercentOnly
        );
        assert_eq!(
            DocumentKind::PurchaseOrder.line_discount_policy(),
            LineDiscountPolicy::AmountOnly
        );
    }

    #[test]
    fn test_status_defaults() {
        assert_eq!(InvoiceStatus::default(), InvoiceStatus::Draft);
        assert_eq!(PurchaseOrderStatus::default(), PurchaseOrderStatus::Draft);
        assert_eq!(SalesOrderStatus::default(), SalesOrderStatus::Draft);
    }
}
