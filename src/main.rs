// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use wallettrack::{cli, commands, store::Store};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wallettrack=warn")),
        )
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // State is transient: every run starts from the built-in categories.
    let mut store = Store::with_defaults();

    match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("recurring", sub)) => commands::recurring::handle(&mut store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
