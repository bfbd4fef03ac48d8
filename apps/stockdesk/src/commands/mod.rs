//! # Commands Module
//!
//! Operations the front end (here: the CLI) can invoke.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  CLI / UI  ──►  commands::*  ──►  DocumentEditor / Store  ──►  core    │
//! │                      │                                                  │
//! │                      └── Result<T, ApiError>  (serializable)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! | Module     | Commands                                                  |
//! |------------|-----------------------------------------------------------|
//! | `catalog`  | list_catalog, get_catalog_item                            |
//! | `document` | list/get documents, editor session, save_document         |
//! | `quote`    | ad-hoc totals from `QTYxPRICE` arguments                  |

pub mod catalog;
pub mod document;
pub mod quote;
