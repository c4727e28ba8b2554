// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use smartbudget::{assistant::GeminiAssistant, cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = store::FileStore::open_default()?;
    let assistant = GeminiAssistant::from_env();

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data directory at {}", store.dir().display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&store, &assistant, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("ask", sub)) => commands::chat::handle(&store, &assistant, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
