//! # Repository Module
//!
//! The storage seam between editors and wherever records live.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Editor save / CLI command                                             │
//! │       │                                                                 │
//! │       │  store.invoices().save(invoice)                                │
//! │       ▼                                                                 │
//! │  Repository<Invoice>  (trait)                                          │
//! │  ├── find_by_id(&self, id)                                             │
//! │  ├── list(&self)                                                       │
//! │  └── save(&self, entity)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemoryRepository<Invoice>   (tests, demo, the current front end)    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories take `&self`; implementations handle their own locking so a
//! store can be shared by reference.

pub mod memory;

use stockdesk_core::{CatalogItem, Invoice, PurchaseOrder, SalesOrder};

use crate::error::{StoreError, StoreResult};

pub use memory::InMemoryRepository;

/// A record a repository can hold.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in errors and logs.
    const KIND: &'static str;

    /// Name of the business key field, for duplicate errors.
    const KEY_FIELD: &'static str;

    fn id(&self) -> &str;

    /// Business key that must be unique across records (number, SKU).
    fn key(&self) -> &str;
}

/// Storage for one entity type.
pub trait Repository<T: Entity>: Send + Sync {
    fn find_by_id(&self, id: &str) -> StoreResult<Option<T>>;

    /// All records, in first-saved order.
    fn list(&self) -> StoreResult<Vec<T>>;

    /// Inserts, or replaces the record with the same id in place.
    ///
    /// Fails with [`StoreError::Duplicate`] when another record already
    /// holds the same business key.
    fn save(&self, entity: T) -> StoreResult<T>;

    /// Like [`find_by_id`](Self::find_by_id), but a missing record is an error.
    fn get(&self, id: &str) -> StoreResult<T> {
        self.find_by_id(id)?
            .ok_or_else(|| StoreError::not_found(T::KIND, id))
    }

    /// Finds a record by its business key.
    fn find_by_key(&self, key: &str) -> StoreResult<Option<T>> {
        Ok(self.list()?.into_iter().find(|e| e.key() == key))
    }
}

// =============================================================================
// Entity Implementations
// =============================================================================

impl Entity for CatalogItem {
    const KIND: &'static str = "Catalog item";
    const KEY_FIELD: &'static str = "sku";

    fn id(&self) -> &str {
        &self.id
    }

    fn key(&self) -> &str {
        &self.sku
    }
}

impl Entity for Invoice {
    const KIND: &'static str = "Invoice";
    const KEY_FIELD: &'static str = "number";

    fn id(&self) -> &str {
        &self.id
    }

    fn key(&self) -> &str {
        &self.number
    }
}

impl Entity for PurchaseOrder {
    const KIND: &'static str = "Purchase order";
    const KEY_FIELD: &'static str = "number";

    fn id(&self) -> &str {
        &self.id
    }

    fn key(&self) -> &str {
        &self.number
    }
}

impl Entity for SalesOrder {
    const KIND: &'static str = "Sales order";
    const KEY_FIELD: &'static str = "number";

    fn id(&self) -> &str {
        &self.id
    }

    fn key(&self) -> &str {
        &self.number
    }
}
