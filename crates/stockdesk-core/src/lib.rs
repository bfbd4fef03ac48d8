//! # stockdesk-core: Pure Business Logic for Stockdesk
//!
//! Everything the invoice, purchase-order and sales-order forms compute,
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockdesk Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              apps/stockdesk (editor sessions, CLI)              │   │
//! │  │   open_document ──► add_line / select_item ──► save_document    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockdesk-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌────────────┐  ┌────────────┐     │   │
//! │  │   │  money  │  │  types  │  │   ledger   │  │ validation │     │   │
//! │  │   │ Money   │  │ Invoice │  │ LineItem-  │  │  coerce_*  │     │   │
//! │  │   │ Rate    │  │ PO / SO │  │ Ledger     │  │  validate_*│     │   │
//! │  │   └─────────┘  └─────────┘  └────────────┘  └────────────┘     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               stockdesk-store (repositories)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer-cent `Money` and basis-point `Rate`
//! - [`types`] - Line items, catalog items, documents
//! - [`ledger`] - The line-item ledger and its derived totals
//! - [`enrichment`] - Pre-filling a line from a catalog item
//! - [`validation`] - Form input coercion and save-time checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockdesk_core::{LineItem, LineItemLedger, Money, Rate};
//!
//! let mut ledger = LineItemLedger::new();
//! ledger.add_item(LineItem::new(2, Money::from_cents(1000)));
//! ledger.add_item(LineItem::new(1, Money::from_cents(500)));
//!
//! let totals = ledger.compute_totals(Rate::zero(), Rate::from_percent(20));
//! assert_eq!(totals.discount_amount.cents(), 500);
//! assert_eq!(totals.total.cents(), 2000);
//! ```

pub mod enrichment;
pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use enrichment::apply_catalog_item;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{LedgerTotals, LineField, LineItemLedger};
pub use money::{Money, Rate};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines on one document.
///
/// Keeps a runaway paste from producing an unprintable invoice.
pub const MAX_DOCUMENT_LINES: usize = 200;

/// Largest quantity one line can carry. Larger input is clamped.
pub const MAX_LINE_QUANTITY: i64 = 1_000_000;

/// Largest unit price one line can carry ($100,000,000.00). Larger input
/// is clamped.
///
/// With [`MAX_LINE_QUANTITY`] this keeps a single line extension well
/// inside `i64` cents.
pub const MAX_UNIT_PRICE: Money = Money::from_cents(10_000_000_000);
