//! # stockdesk-store: Repository Layer for Stockdesk
//!
//! Record storage for catalog items and documents behind a repository
//! trait, with an in-memory implementation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockdesk Data Flow                              │
//! │                                                                         │
//! │  Editor save / CLI list                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 stockdesk-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐    ┌────────────┐  │   │
//! │  │   │    Store      │    │   Repository<T>  │    │    seed    │  │   │
//! │  │   │  (store.rs)   │───►│  InMemory impl   │◄───│ demo data  │  │   │
//! │  │   └───────────────┘    └──────────────────┘    └────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stockdesk_core::DocumentKind;
//! use stockdesk_store::{Repository, Store};
//!
//! let store = Store::seeded().unwrap();
//! let invoice = store.find_document(DocumentKind::Invoice, "INV-1001").unwrap().unwrap();
//! assert_eq!(invoice.party(), "Northwind Traders");
//! assert!(store.catalog().find_by_id("itm-001").unwrap().is_some());
//! ```

pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use repository::{Entity, InMemoryRepository, Repository};
pub use store::Store;
