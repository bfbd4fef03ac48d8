//! # State Module
//!
//! Application state, split by concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌────────────────────┐  ┌──────────────────┐        │
//! │  │    Store     │  │  DocumentEditor    │  │   ConfigState    │        │
//! │  │ (repository  │  │  one per open      │  │  currency, tax   │        │
//! │  │  crate)      │  │  dialog, owned     │  │  defaults        │        │
//! │  └──────────────┘  └────────────────────┘  └──────────────────┘        │
//! │                                                                         │
//! │  • Store: repositories lock internally, shared by reference            │
//! │  • DocumentEditor: exclusively owned, no lock                          │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod editor;

pub use config::ConfigState;
pub use editor::DocumentEditor;
