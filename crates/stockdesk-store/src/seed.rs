//! # Demo Dataset
//!
//! A small office-supplies business: a handful of catalog items and two of
//! each document kind. Ids are readable so the CLI can address them.
//!
//! | Kind           | Numbers              |
//! |----------------|----------------------|
//! | Invoice        | INV-1001, INV-1002   |
//! | Purchase order | PO-2001, PO-2002     |
//! | Sales order    | SO-3001, SO-3002     |

use chrono::NaiveDate;

use stockdesk_core::{
    CatalogItem, Document, Invoice, InvoiceStatus, LineDiscount, LineItem, Money,
    PurchaseOrder, PurchaseOrderStatus, Rate, SalesOrder, SalesOrderStatus,
};

/// (id, sku, name, description, price in cents, unit, active)
const CATALOG: &[(&str, &str, &str, Option<&str>, i64, &str, bool)] = &[
    ("itm-001", "CHAIR-ERGO", "Ergonomic Office Chair", Some("Mesh back, adjustable arms"), 24_900, "pcs", true),
    ("itm-002", "DESK-STAND", "Standing Desk", Some("Electric, 140x70 cm"), 48_900, "pcs", true),
    ("itm-003", "MON-27", "27\" Monitor", Some("QHD IPS panel"), 31_999, "pcs", true),
    ("itm-004", "KB-MECH", "Mechanical Keyboard", None, 8_950, "pcs", true),
    ("itm-005", "MOUSE-WL", "Wireless Mouse", None, 2_499, "pcs", true),
    ("itm-006", "PAPER-A4", "A4 Copy Paper", Some("80 gsm, 500 sheets"), 649, "box", true),
    ("itm-007", "TONER-BK", "Black Toner Cartridge", None, 7_400, "pcs", true),
    ("itm-008", "FAX-LEG", "Legacy Fax Machine", None, 12_000, "pcs", false),
];

pub fn catalog() -> Vec<CatalogItem> {
    CATALOG
        .iter()
        .map(|&(id, sku, name, description, price, unit, is_active)| CatalogItem {
            id: id.to_string(),
            sku: sku.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            unit_price: Money::from_cents(price),
            unit: unit.to_string(),
            is_active,
        })
        .collect()
}

fn line(id: &str, catalog_id: &str, quantity: i64) -> LineItem {
    let item = CATALOG
        .iter()
        .find(|entry| entry.0 == catalog_id)
        .map(|&(_, _, name, _, price, _, _)| (name, price))
        .unwrap_or(("Unlisted item", 0));

    LineItem::new(quantity, Money::from_cents(item.1))
        .with_id(id)
        .with_catalog_item(catalog_id)
        .with_description(item.0)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn documents() -> Vec<Document> {
    let mut documents = Vec::new();

    let mut invoice = Invoice::draft("INV-1001", "Northwind Traders", date(2024, 3, 4));
    invoice.id = "inv-1001".to_string();
    invoice.due_date = Some(date(2024, 4, 3));
    invoice.status = InvoiceStatus::Sent;
    invoice.tax_rate = Rate::from_percent(10);
    invoice.lines = vec![line("l1", "itm-001", 4), line("l2", "itm-004", 4)];
    documents.push(invoice.into());

    let mut invoice = Invoice::draft("INV-1002", "Contoso Ltd", date(2024, 3, 18));
    invoice.id = "inv-1002".to_string();
    invoice.status = InvoiceStatus::Draft;
    invoice.tax_rate = Rate::from_bps(825);
    invoice.discount_rate = Rate::from_percent(5);
    invoice.notes = Some("Loyalty discount applied".to_string());
    invoice.lines = vec![line("l1", "itm-006", 20), line("l2", "itm-007", 3)];
    documents.push(invoice.into());

    let mut po = PurchaseOrder::draft("PO-2001", "Fabrikam Supplies", date(2024, 2, 20));
    po.id = "po-2001".to_string();
    po.expected_date = Some(date(2024, 3, 1));
    po.status = PurchaseOrderStatus::Received;
    po.tax_rate = Rate::from_percent(10);
    po.lines = vec![
        line("l1", "itm-003", 10).with_discount(LineDiscount::Amount(Money::from_cents(5_000))),
        line("l2", "itm-005", 25),
    ];
    documents.push(po.into());

    let mut po = PurchaseOrder::draft("PO-2002", "Adventure Works", date(2024, 3, 22));
    po.id = "po-2002".to_string();
    po.status = PurchaseOrderStatus::Ordered;
    po.discount_rate = Rate::from_percent(3);
    po.lines = vec![line("l1", "itm-002", 6)];
    documents.push(po.into());

    let mut so = SalesOrder::draft("SO-3001", "Northwind Traders", date(2024, 2, 28));
    so.id = "so-3001".to_string();
    so.delivery_date = Some(date(2024, 3, 2));
    so.shipping_address = Some("12 Harbour Rd, Seattle WA".to_string());
    so.status = SalesOrderStatus::Delivered;
    so.tax_rate = Rate::from_percent(10);
    so.lines = vec![
        line("l1", "itm-001", 4),
        line("l2", "itm-004", 4).with_discount(LineDiscount::Percent(Rate::from_percent(10))),
    ];
    documents.push(so.into());

    let mut so = SalesOrder::draft("SO-3002", "Litware Inc", date(2024, 3, 25));
    so.id = "so-3002".to_string();
    so.status = SalesOrderStatus::Confirmed;
    so.tax_rate = Rate::from_bps(825);
    so.lines = vec![line("l1", "itm-002", 2), line("l2", "itm-003", 2)];
    documents.push(so.into());

    documents
}
