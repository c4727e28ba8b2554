// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};

use crate::assistant::Assistant;
use crate::models::Transaction;
use crate::store::{self, BlobStore};
use crate::utils::{
    fmt_money, maybe_print_json, parse_amount, parse_date, parse_type, pretty_table,
};

pub fn handle(store: &dyn BlobStore, assistant: &dyn Assistant, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, assistant, sub),
        Some(("list", sub)) => list(store, sub),
        Some(("edit", sub)) => edit(store, sub),
        Some(("rm", sub)) => rm(store, sub),
        _ => Ok(()),
    }
}

fn add(store: &dyn BlobStore, assistant: &dyn Assistant, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap().trim().to_string();
    if description.is_empty() {
        bail!("Description must not be empty");
    }
    let r#type = parse_type(sub.get_one::<String>("type").unwrap())?;
    let category = match sub.get_one::<String>("category") {
        Some(c) => c.clone(),
        None => {
            let suggested = assistant.categorize(&description);
            println!("Suggested category: {}", suggested);
            suggested
        }
    };

    let mut transactions = store::load_transactions(store)?;
    let id = store::next_id(&transactions);
    transactions.insert(
        0, // ledger keeps newest first
        Transaction {
            id,
            date,
            amount,
            category: category.clone(),
            description: description.clone(),
            r#type,
        },
    );
    store::save_transactions(store, &transactions)?;
    println!(
        "Recorded #{} {} {} '{}' ({})",
        id,
        date,
        fmt_money(&amount),
        description,
        category
    );
    Ok(())
}

/// Apply the list filters (substring search over description and category,
/// then limit) to the stored ledger.
pub fn query_rows(store: &dyn BlobStore, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let mut transactions = store::load_transactions(store)?;
    if let Some(needle) = sub.get_one::<String>("search") {
        let needle = needle.to_lowercase();
        transactions.retain(|t| {
            t.description.to_lowercase().contains(&needle)
                || t.category.to_lowercase().contains(&needle)
        });
    }
    if let Some(&limit) = sub.get_one::<usize>("limit") {
        transactions.truncate(limit);
    }
    Ok(transactions)
}

fn list(store: &dyn BlobStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                let signed = match t.r#type {
                    crate::models::TransactionType::Income => format!("+{}", fmt_money(&t.amount)),
                    crate::models::TransactionType::Expense => format!("-{}", fmt_money(&t.amount)),
                };
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.category.clone(),
                    t.description.clone(),
                    signed,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Category", "Description", "Amount"], rows)
        );
    }
    Ok(())
}

fn edit(store: &dyn BlobStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut transactions = store::load_transactions(store)?;
    let Some(t) = transactions.iter_mut().find(|t| t.id == id) else {
        bail!("Transaction #{} not found", id);
    };
    if let Some(s) = sub.get_one::<String>("date") {
        t.date = parse_date(s)?;
    }
    if let Some(s) = sub.get_one::<String>("amount") {
        t.amount = parse_amount(s)?;
    }
    if let Some(s) = sub.get_one::<String>("category") {
        t.category = s.clone();
    }
    if let Some(s) = sub.get_one::<String>("description") {
        let s = s.trim();
        if s.is_empty() {
            bail!("Description must not be empty");
        }
        t.description = s.to_string();
    }
    if let Some(s) = sub.get_one::<String>("type") {
        t.r#type = parse_type(s)?;
    }
    store::save_transactions(store, &transactions)?;
    println!("Updated #{}", id);
    Ok(())
}

fn rm(store: &dyn BlobStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut transactions = store::load_transactions(store)?;
    let before = transactions.len();
    transactions.retain(|t| t.id != id);
    if transactions.len() == before {
        bail!("Transaction #{} not found", id);
    }
    store::save_transactions(store, &transactions)?;
    println!("Deleted #{}", id);
    Ok(())
}
