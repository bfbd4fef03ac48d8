//! Command-line interface definition.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use stockdesk_core::DocumentKind;

/// Stockdesk - invoice, purchase order and sales order line totals
#[derive(Parser, Debug)]
#[command(name = "stockdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog items
    Catalog {
        /// Include inactive items
        #[arg(long)]
        all: bool,
    },

    /// List documents of one kind with their totals
    List {
        #[arg(value_enum)]
        kind: KindArg,
    },

    /// Show one document's lines and totals
    Show {
        #[arg(value_enum)]
        kind: KindArg,

        /// Document id or number (e.g. INV-1001)
        key: String,
    },

    /// Compute totals for ad-hoc lines
    Quote {
        /// QTYxPRICE[@DISCOUNT], discount ending in % is a percentage
        #[arg(short, long = "line", required = true)]
        lines: Vec<String>,

        /// Tax rate in percent (defaults to STOCKDESK_TAX_RATE)
        #[arg(long)]
        tax: Option<String>,

        /// Document discount in percent
        #[arg(long)]
        discount: Option<String>,
    },

    /// Build a document from catalog items and save it to the session store
    Draft {
        #[arg(value_enum)]
        kind: KindArg,

        /// Document number (e.g. INV-1003)
        #[arg(long)]
        number: String,

        /// Customer or supplier name
        #[arg(long)]
        party: String,

        /// Catalog id or SKU, optionally with a quantity: SKU[:QTY]
        #[arg(short, long = "item", required = true)]
        items: Vec<String>,

        /// Issue/order date (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        tax: Option<String>,

        #[arg(long)]
        discount: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Invoice,
    PurchaseOrder,
    SalesOrder,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Invoice => DocumentKind::Invoice,
            KindArg::PurchaseOrder => DocumentKind::PurchaseOrder,
            KindArg::SalesOrder => DocumentKind::SalesOrder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::try_parse_from(["stockdesk", "list", "purchase-order"]).unwrap();
        match cli.command {
            Command::List { kind } => assert_eq!(DocumentKind::from(kind), DocumentKind::PurchaseOrder),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parse_quote_with_global_json() {
        let cli = Cli::try_parse_from([
            "stockdesk", "quote", "-l", "2x10", "--line", "1x5@10%", "--tax", "8.25", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        if let Command::Quote { lines, tax, discount } = cli.command {
            assert_eq!(lines, vec!["2x10", "1x5@10%"]);
            assert_eq!(tax.as_deref(), Some("8.25"));
            assert!(discount.is_none());
        } else {
            panic!("Expected Quote command");
        }
    }

    #[test]
    fn test_cli_quote_requires_a_line() {
        assert!(Cli::try_parse_from(["stockdesk", "quote"]).is_err());
    }

    #[test]
    fn test_cli_parse_draft() {
        let cli = Cli::try_parse_from([
            "stockdesk", "draft", "sales-order", "--number", "SO-4000", "--party", "Initech",
            "-i", "KB-MECH", "-i", "MOUSE-WL:3", "--date", "2024-05-01",
        ])
        .unwrap();
        if let Command::Draft { kind, items, date, .. } = cli.command {
            assert_eq!(kind, KindArg::SalesOrder);
            assert_eq!(items.len(), 2);
            assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1));
        } else {
            panic!("Expected Draft command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["stockdesk", "list", "receipt"]).is_err());
    }
}
