//! # Store
//!
//! Bundles one repository per entity type and adds the document-level
//! lookups the editors and CLI need.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Store                                                        │
//! │  ├── catalog()          Box<dyn Repository<CatalogItem>>      │
//! │  ├── invoices()         Box<dyn Repository<Invoice>>          │
//! │  ├── purchase_orders()  Box<dyn Repository<PurchaseOrder>>    │
//! │  └── sales_orders()     Box<dyn Repository<SalesOrder>>       │
//! │                                                               │
//! │  find_document(kind, id_or_number) ─┐                         │
//! │  list_documents(kind)               ├─► dispatch on kind      │
//! │  save_document(document)           ─┘                         │
//! └───────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use stockdesk_core::{CatalogItem, Document, DocumentKind, Invoice, PurchaseOrder, SalesOrder};

use crate::error::StoreResult;
use crate::repository::{InMemoryRepository, Repository};
use crate::seed;

pub struct Store {
    catalog: Box<dyn Repository<CatalogItem>>,
    invoices: Box<dyn Repository<Invoice>>,
    purchase_orders: Box<dyn Repository<PurchaseOrder>>,
    sales_orders: Box<dyn Repository<SalesOrder>>,
}

impl Store {
    /// Store backed by caller-supplied repositories.
    pub fn with_repositories(
        catalog: Box<dyn Repository<CatalogItem>>,
        invoices: Box<dyn Repository<Invoice>>,
        purchase_orders: Box<dyn Repository<PurchaseOrder>>,
        sales_orders: Box<dyn Repository<SalesOrder>>,
    ) -> Self {
        Store {
            catalog,
            invoices,
            purchase_orders,
            sales_orders,
        }
    }

    /// Empty in-memory store.
    pub fn in_memory() -> Self {
        Store::with_repositories(
            Box::new(InMemoryRepository::<CatalogItem>::new()),
            Box::new(InMemoryRepository::<Invoice>::new()),
            Box::new(InMemoryRepository::<PurchaseOrder>::new()),
            Box::new(InMemoryRepository::<SalesOrder>::new()),
        )
    }

    /// In-memory store loaded with the demo dataset.
    pub fn seeded() -> StoreResult<Self> {
        let store = Store::with_repositories(
            Box::new(InMemoryRepository::with_records(seed::catalog())?),
            Box::new(InMemoryRepository::<Invoice>::new()),
            Box::new(InMemoryRepository::<PurchaseOrder>::new()),
            Box::new(InMemoryRepository::<SalesOrder>::new()),
        );
        for document in seed::documents() {
            store.save_document(document)?;
        }
        info!(
            catalog = store.catalog.list()?.len(),
            invoices = store.invoices.list()?.len(),
            purchase_orders = store.purchase_orders.list()?.len(),
            sales_orders = store.sales_orders.list()?.len(),
            "Seeded in-memory store"
        );
        Ok(store)
    }

    pub fn catalog(&self) -> &dyn Repository<CatalogItem> {
        self.catalog.as_ref()
    }

    pub fn invoices(&self) -> &dyn Repository<Invoice> {
        self.invoices.as_ref()
    }

    pub fn purchase_orders(&self) -> &dyn Repository<PurchaseOrder> {
        self.purchase_orders.as_ref()
    }

    pub fn sales_orders(&self) -> &dyn Repository<SalesOrder> {
        self.sales_orders.as_ref()
    }

    /// Looks a document up by id, falling back to its number.
    pub fn find_document(&self, kind: DocumentKind, key: &str) -> StoreResult<Option<Document>> {
        Ok(match kind {
            DocumentKind::Invoice => find_either(self.invoices(), key)?.map(Document::from),
            DocumentKind::PurchaseOrder => {
                find_either(self.purchase_orders(), key)?.map(Document::from)
            }
            DocumentKind::SalesOrder => find_either(self.sales_orders(), key)?.map(Document::from),
        })
    }

    pub fn list_documents(&self, kind: DocumentKind) -> StoreResult<Vec<Document>> {
        Ok(match kind {
            DocumentKind::Invoice => wrap(self.invoices().list()?),
            DocumentKind::PurchaseOrder => wrap(self.purchase_orders().list()?),
            DocumentKind::SalesOrder => wrap(self.sales_orders().list()?),
        })
    }

    pub fn save_document(&self, document: Document) -> StoreResult<Document> {
        Ok(match document {
            Document::Invoice(d) => Document::from(self.invoices().save(d)?),
            Document::PurchaseOrder(d) => Document::from(self.purchase_orders().save(d)?),
            Document::SalesOrder(d) => Document::from(self.sales_orders().save(d)?),
        })
    }
}

fn find_either<T>(repo: &dyn Repository<T>, key: &str) -> StoreResult<Option<T>>
where
    T: crate::repository::Entity,
{
    match repo.find_by_id(key)? {
        Some(found) => Ok(Some(found)),
        None => repo.find_by_key(key),
    }
}

fn wrap<T: Into<Document>>(records: Vec<T>) -> Vec<Document> {
    records.into_iter().map(Into::into).collect()
}
