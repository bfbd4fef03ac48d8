//! # Catalog Enrichment
//!
//! Selecting a catalog item in a line's item picker pre-fills the line's
//! description and unit price. This is a separate step the caller runs
//! after resolving the catalog record, so the ledger never needs to know
//! where catalog data lives.
//!
//! ```text
//! editor: select item "BOLT-M8" on line 3
//!     │
//!     ├── store.catalog().find_by_id(..)      (caller)
//!     │
//!     └── apply_catalog_item(ledger, line 3, &item)
//!             ├── catalog_item_id = item.id
//!             ├── description     = item.line_description()
//!             └── unit_price      = item.unit_price
//! ```

use crate::ledger::{LineField, LineItemLedger};
use crate::types::{CatalogItem, LineId};

/// Copies the catalog reference, description and price onto a line.
///
/// Quantity and discount are left as the user entered them. Returns
/// `false` when the line doesn't exist.
pub fn apply_catalog_item(ledger: &mut LineItemLedger, line_id: &LineId, item: &CatalogItem) -> bool {
    if ledger.get(line_id).is_none() {
        return false;
    }

    ledger.update_item(line_id, LineField::CatalogItem(Some(item.id.clone())));
    ledger.update_item(line_id, LineField::Description(item.line_description()));
    ledger.update_item(line_id, LineField::UnitPrice(item.unit_price))
}
