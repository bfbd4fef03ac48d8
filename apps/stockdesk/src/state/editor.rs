//! # Editor State
//!
//! One `DocumentEditor` per open create/edit dialog.
//!
//! ## Dialog Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "New invoice" ──► DocumentEditor::create()   ledger = [blank line]     │
//! │  "Edit SO-3001" ─► DocumentEditor::open()     ledger = stored lines     │
//! │                         │                                               │
//! │            add_line / update_line / select_catalog_item / remove_line   │
//! │            set_tax_rate / set_discount_rate                             │
//! │                         │   totals() recomputed after every edit        │
//! │                         ▼                                               │
//! │  "Save"   ──► build() ──► validate ──► Store::save_document             │
//! │  "Cancel" ──► drop(editor)   (nothing persisted)                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The editor owns its ledger outright. Nothing else reads or writes it
//! while the dialog is open, so there is no lock.

use tracing::debug;

use stockdesk_core::validation::{validate_document, validate_line_discount, validate_rate};
use stockdesk_core::{
    apply_catalog_item, CatalogItem, CoreError, CoreResult, Document, DocumentKind,
    LedgerTotals, LineField, LineId, LineItem, LineItemLedger, Rate,
};

use super::ConfigState;

#[derive(Debug, Clone)]
pub struct DocumentEditor {
    /// Header fields. Its own lines and rates are stale while editing; the
    /// ledger and the fields below are authoritative until `build()`.
    header: Document,
    ledger: LineItemLedger,
    tax_rate: Rate,
    discount_rate: Rate,
    is_new: bool,
}

impl DocumentEditor {
    /// Starts a new document with one blank line and the configured
    /// default rates.
    pub fn create(header: Document, config: &ConfigState) -> Self {
        let mut ledger = LineItemLedger::new();
        ledger.add_blank();
        debug!(kind = %header.kind(), number = header.number(), "Opening new document editor");

        DocumentEditor {
            header,
            ledger,
            tax_rate: config.default_tax_rate,
            discount_rate: config.default_discount_rate,
            is_new: true,
        }
    }

    /// Opens a stored document for editing.
    pub fn open(document: Document) -> Self {
        let mut ledger = document.ledger();
        if ledger.is_empty() {
            ledger.add_blank();
        }
        debug!(kind = %document.kind(), number = document.number(), lines = ledger.len(), "Opening document editor");

        DocumentEditor {
            tax_rate: document.tax_rate(),
            discount_rate: document.discount_rate(),
            header: document,
            ledger,
            is_new: false,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.header.kind()
    }

    pub fn document_id(&self) -> &str {
        self.header.id()
    }

    pub fn number(&self) -> &str {
        self.header.number()
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Header fields for the form (customer, dates, notes...).
    pub fn header_mut(&mut self) -> &mut Document {
        &mut self.header
    }

    pub fn lines(&self) -> &[LineItem] {
        self.ledger.items()
    }

    pub fn tax_rate(&self) -> Rate {
        self.tax_rate
    }

    pub fn discount_rate(&self) -> Rate {
        self.discount_rate
    }

    /// Appends a blank line (one unit at zero price).
    pub fn add_line(&mut self) -> LineId {
        self.ledger.add_blank()
    }

    /// Edits one field of one line.
    ///
    /// Discounts are checked against the document kind right away, so the
    /// form can flag them next to the field.
    pub fn update_line(&mut self, line_id: &LineId, field: LineField) -> CoreResult<()> {
        if let LineField::Discount(discount) = &field {
            validate_line_discount(self.kind(), discount.as_ref())?;
        }

        if self.ledger.update_item(line_id, field) {
            Ok(())
        } else {
            Err(CoreError::LineNotFound(line_id.to_string()))
        }
    }

    /// Points a line at a catalog item and pre-fills description and price.
    pub fn select_catalog_item(&mut self, line_id: &LineId, item: &CatalogItem) -> CoreResult<()> {
        if !item.is_active {
            return Err(CoreError::CatalogItemInactive {
                sku: item.sku.clone(),
            });
        }

        if apply_catalog_item(&mut self.ledger, line_id, item) {
            debug!(line_id = %line_id, sku = %item.sku, "Line filled from catalog");
            Ok(())
        } else {
            Err(CoreError::LineNotFound(line_id.to_string()))
        }
    }

    /// Removes a line. The form always keeps one row, so removing the
    /// last remaining line is refused.
    pub fn remove_line(&mut self, line_id: &LineId) -> CoreResult<()> {
        if self.ledger.get(line_id).is_none() {
            return Err(CoreError::LineNotFound(line_id.to_string()));
        }
        if self.ledger.len() == 1 {
            return Err(CoreError::LastLine);
        }
        self.ledger.remove_item(line_id);
        Ok(())
    }

    pub fn set_tax_rate(&mut self, rate: Rate) -> CoreResult<()> {
        validate_rate("tax_rate", rate)?;
        self.tax_rate = rate;
        Ok(())
    }

    pub fn set_discount_rate(&mut self, rate: Rate) -> CoreResult<()> {
        validate_rate("discount_rate", rate)?;
        self.discount_rate = rate;
        Ok(())
    }

    /// Totals as the form shows them right now.
    pub fn totals(&self) -> LedgerTotals {
        self.ledger.compute_totals(self.tax_rate, self.discount_rate)
    }

    /// Assembles the document to save: header plus current lines and rates.
    pub fn build(&self) -> CoreResult<Document> {
        let mut document = self.header.clone();
        document.set_pricing(self.ledger.items().to_vec(), self.tax_rate, self.discount_rate);
        validate_document(&document)?;
        Ok(document)
    }

    /// Marks the editor as editing a stored document after a save.
    pub fn mark_saved(&mut self, saved: Document) {
        self.header = saved;
        self.is_new = false;
    }
}
