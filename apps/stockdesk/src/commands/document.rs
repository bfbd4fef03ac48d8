//! # Document Commands
//!
//! Listing documents and driving an editor session.
//!
//! ## Editor Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  open_new_document ─┐                                                   │
//! │  open_document ─────┴─► DocumentEditor                                  │
//! │                              │                                          │
//! │        add_line / update_line / select_item / remove_line / set_rates   │
//! │                              │  each returns EditorResponse             │
//! │                              │  (lines + freshly computed totals)       │
//! │                              ▼                                          │
//! │                        save_document ──► Store                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use stockdesk_core::validation::{coerce_quantity, coerce_rate};
use stockdesk_core::{
    Document, DocumentKind, Invoice, LedgerTotals, LineField, LineId, LineItem, PurchaseOrder,
    SalesOrder,
};
use stockdesk_store::Store;

use crate::commands::catalog::get_catalog_item;
use crate::error::ApiError;
use crate::state::{ConfigState, DocumentEditor};

/// One row of a document table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: String,
    pub kind: DocumentKind,
    pub number: String,
    pub party: String,
    pub totals: LedgerTotals,
}

impl From<&Document> for DocumentSummary {
    fn from(document: &Document) -> Self {
        DocumentSummary {
            id: document.id().to_string(),
            kind: document.kind(),
            number: document.number().to_string(),
            party: document.party().to_string(),
            totals: document.totals(),
        }
    }
}

/// A full document with its derived totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetail {
    pub document: Document,
    pub totals: LedgerTotals,
}

/// What the editor dialog renders after every change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorResponse {
    pub document_id: String,
    pub kind: DocumentKind,
    pub number: String,
    pub lines: Vec<LineItem>,
    pub totals: LedgerTotals,
}

impl From<&DocumentEditor> for EditorResponse {
    fn from(editor: &DocumentEditor) -> Self {
        EditorResponse {
            document_id: editor.document_id().to_string(),
            kind: editor.kind(),
            number: editor.number().to_string(),
            lines: editor.lines().to_vec(),
            totals: editor.totals(),
        }
    }
}

// =============================================================================
// Read Commands
// =============================================================================

pub fn list_documents(store: &Store, kind: DocumentKind) -> Result<Vec<DocumentSummary>, ApiError> {
    debug!(kind = %kind, "list_documents command");
    Ok(store
        .list_documents(kind)?
        .iter()
        .map(DocumentSummary::from)
        .collect())
}

/// Fetches one document by id or number.
pub fn get_document(store: &Store, kind: DocumentKind, key: &str) -> Result<DocumentDetail, ApiError> {
    debug!(kind = %kind, key = %key, "get_document command");
    let document = store
        .find_document(kind, key)?
        .ok_or_else(|| ApiError::not_found(kind.as_str(), key))?;
    Ok(DocumentDetail {
        totals: document.totals(),
        document,
    })
}

// =============================================================================
// Editor Commands
// =============================================================================

/// Opens the "new document" dialog.
pub fn open_new_document(
    config: &ConfigState,
    kind: DocumentKind,
    number: &str,
    party: &str,
    date: NaiveDate,
) -> DocumentEditor {
    debug!(kind = %kind, number = %number, "open_new_document command");
    let header: Document = match kind {
        DocumentKind::Invoice => Invoice::draft(number, party, date).into(),
        DocumentKind::PurchaseOrder => PurchaseOrder::draft(number, party, date).into(),
        DocumentKind::SalesOrder => SalesOrder::draft(number, party, date).into(),
    };
    DocumentEditor::create(header, config)
}

/// Opens the "edit document" dialog for a stored document.
pub fn open_document(store: &Store, kind: DocumentKind, key: &str) -> Result<DocumentEditor, ApiError> {
    let detail = get_document(store, kind, key)?;
    Ok(DocumentEditor::open(detail.document))
}

pub fn add_line(editor: &mut DocumentEditor) -> EditorResponse {
    let line_id = editor.add_line();
    debug!(line_id = %line_id, "add_line command");
    EditorResponse::from(&*editor)
}

pub fn update_line(
    editor: &mut DocumentEditor,
    line_id: &str,
    field: LineField,
) -> Result<EditorResponse, ApiError> {
    debug!(line_id = %line_id, "update_line command");
    editor.update_line(&LineId::from(line_id), field)?;
    Ok(EditorResponse::from(&*editor))
}

/// Item picker selection: resolves the catalog item, then pre-fills the line.
pub fn select_catalog_item(
    store: &Store,
    editor: &mut DocumentEditor,
    line_id: &str,
    catalog_key: &str,
) -> Result<EditorResponse, ApiError> {
    debug!(line_id = %line_id, catalog_key = %catalog_key, "select_catalog_item command");
    let item = get_catalog_item(store, catalog_key)?;
    editor.select_catalog_item(&LineId::from(line_id), &item)?;
    Ok(EditorResponse::from(&*editor))
}

pub fn remove_line(editor: &mut DocumentEditor, line_id: &str) -> Result<EditorResponse, ApiError> {
    debug!(line_id = %line_id, "remove_line command");
    editor.remove_line(&LineId::from(line_id))?;
    Ok(EditorResponse::from(&*editor))
}

/// Rate fields arrive as text; garbage becomes 0%.
pub fn set_rates(
    editor: &mut DocumentEditor,
    tax_rate: Option<&str>,
    discount_rate: Option<&str>,
) -> Result<EditorResponse, ApiError> {
    if let Some(input) = tax_rate {
        editor.set_tax_rate(coerce_rate(input))?;
    }
    if let Some(input) = discount_rate {
        editor.set_discount_rate(coerce_rate(input))?;
    }
    Ok(EditorResponse::from(&*editor))
}

/// Validates and persists the editor's document.
pub fn save_document(store: &Store, editor: &mut DocumentEditor) -> Result<DocumentDetail, ApiError> {
    let document = editor.build()?;
    let saved = store.save_document(document)?;
    info!(
        kind = %saved.kind(),
        number = saved.number(),
        created = editor.is_new(),
        "Document saved"
    );
    editor.mark_saved(saved.clone());
    Ok(DocumentDetail {
        totals: saved.totals(),
        document: saved,
    })
}

/// Splits `SKU[:QTY]`. Without a colon the whole argument is the key.
fn split_item_arg(arg: &str) -> (&str, Option<i64>) {
    match arg.rsplit_once(':') {
        Some((key, qty)) => (key.trim(), Some(coerce_quantity(qty))),
        None => (arg.trim(), None),
    }
}

/// Runs a whole editor session non-interactively: one line per item arg,
/// optional rates, then save.
#[allow(clippy::too_many_arguments)]
pub fn draft_document(
    store: &Store,
    config: &ConfigState,
    kind: DocumentKind,
    number: &str,
    party: &str,
    date: NaiveDate,
    item_args: &[String],
    tax_rate: Option<&str>,
    discount_rate: Option<&str>,
) -> Result<DocumentDetail, ApiError> {
    let mut editor = open_new_document(config, kind, number, party, date);

    for (index, arg) in item_args.iter().enumerate() {
        let line_id = if index == 0 {
            editor.lines()[0].id.clone()
        } else {
            editor.add_line()
        };

        let (key, quantity) = split_item_arg(arg);
        select_catalog_item(store, &mut editor, line_id.as_str(), key)?;
        if let Some(quantity) = quantity {
            editor.update_line(&line_id, LineField::Quantity(quantity))?;
        }
    }

    set_rates(&mut editor, tax_rate, discount_rate)?;
    save_document(store, &mut editor)
}
