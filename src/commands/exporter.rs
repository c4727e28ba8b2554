// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::store::{self, BlobStore};

pub fn handle(store: &dyn BlobStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &dyn BlobStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut transactions = store::load_transactions(store)?;
    transactions.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Open '{}' for writing", out))?;
            wtr.write_record(["id", "date", "amount", "category", "description", "type"])?;
            for t in &transactions {
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_string(),
                    t.amount.to_string(),
                    t.category.clone(),
                    t.description.clone(),
                    t.r#type.as_str().to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let blob = serde_json::to_string_pretty(&transactions)?;
            std::fs::write(out, blob).with_context(|| format!("Write '{}'", out))?;
        }
        other => anyhow::bail!("Unknown export format '{}'", other),
    }
    println!("Exported {} transactions to {}", transactions.len(), out);
    Ok(())
}
