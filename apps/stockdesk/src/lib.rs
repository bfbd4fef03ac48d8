//! # Stockdesk Application Library
//!
//! Command layer of the Stockdesk dashboard, driven here by a CLI.
//!
//! ## Module Organization
//! ```text
//! stockdesk_app/
//! ├── lib.rs          ◄─── You are here (logging & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── render.rs       ◄─── Text / JSON output
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── editor.rs   ◄─── Document editor session (owns a ledger)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Item picker commands
//! │   ├── document.rs ◄─── Document list/editor commands
//! │   └── quote.rs    ◄─── Ad-hoc totals
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use stockdesk_store::Store;

use cli::{Cli, Command};
use commands::{catalog, document, quote};
use error::ApiError;
use state::ConfigState;

/// Executes one CLI invocation against `store` and returns the rendered
/// output.
///
/// ## Dispatch
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Cli ──► match command ──► commands::* ──► render::{text, json}         │
/// │                                 │                                       │
/// │                                 └── ApiError ──► caller (exit code 1)   │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli, config: &ConfigState, store: &Store) -> Result<String, ApiError> {
    match cli.command {
        Command::Catalog { all } => {
            let items = catalog::list_catalog(store, all)?;
            if cli.json {
                render::json(&items)
            } else {
                Ok(render::catalog(config, &items))
            }
        }
        Command::List { kind } => {
            let documents = document::list_documents(store, kind.into())?;
            if cli.json {
                render::json(&documents)
            } else {
                Ok(render::document_list(config, &documents))
            }
        }
        Command::Show { kind, key } => {
            let detail = document::get_document(store, kind.into(), &key)?;
            if cli.json {
                render::json(&detail)
            } else {
                Ok(render::document_detail(config, &detail))
            }
        }
        Command::Quote {
            lines,
            tax,
            discount,
        } => {
            let response = quote::quote(config, &lines, tax.as_deref(), discount.as_deref())?;
            if cli.json {
                render::json(&response)
            } else {
                Ok(render::quote(config, &response))
            }
        }
        Command::Draft {
            kind,
            number,
            party,
            items,
            date,
            tax,
            discount,
        } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let detail = document::draft_document(
                store,
                config,
                kind.into(),
                &number,
                &party,
                date,
                &items,
                tax.as_deref(),
                discount.as_deref(),
            )?;
            if cli.json {
                render::json(&detail)
            } else {
                Ok(render::document_detail(config, &detail))
            }
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: `info` for everything, `debug` for stockdesk crates
/// - Override with `RUST_LOG`, e.g. `RUST_LOG=stockdesk_core=trace`
///
/// Logs go to stderr so stdout stays clean for `--json` output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockdesk=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Stockdesk logging initialized");
}
