//! # Stockdesk CLI Entry Point
//!
//! Parses arguments, loads configuration, seeds the session store and
//! hands off to [`stockdesk_app::run`].

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use stockdesk_app::cli::Cli;
use stockdesk_app::state::ConfigState;
use stockdesk_store::Store;

fn main() -> ExitCode {
    let cli = Cli::parse();
    stockdesk_app::init_tracing();

    let config = ConfigState::from_env();
    info!(company = %config.company_name, tax = %config.default_tax_rate, "Configuration loaded");

    let store = match Store::seeded() {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "Failed to load demo data");
            return ExitCode::FAILURE;
        }
    };

    match stockdesk_app::run(cli, &config, &store) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e.message);
            ExitCode::FAILURE
        }
    }
}
