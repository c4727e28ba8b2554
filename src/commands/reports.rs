// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::series;
use crate::store::{self, BlobStore};
use crate::summary;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &dyn BlobStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => print_summary(store, sub),
        Some(("spend-by-category", sub)) => spend_by_category(store, sub),
        Some(("trend", sub)) => trend(store, sub),
        _ => Ok(()),
    }
}

fn print_summary(store: &dyn BlobStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let transactions = store::load_transactions(store)?;
    let s = summary::summarize(&transactions);
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![vec![
            fmt_money(&s.total_income),
            fmt_money(&s.total_expense),
            fmt_money(&s.balance),
        ]];
        println!("{}", pretty_table(&["Income", "Expenses", "Balance"], rows));
    }
    Ok(())
}

fn spend_by_category(store: &dyn BlobStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let transactions = store::load_transactions(store)?;
    let slices = series::category_distribution(&transactions);
    if slices.is_empty() {
        // an empty chart would be misleading; say so instead
        println!("No expense data to display.");
        return Ok(());
    }
    if !maybe_print_json(json_flag, jsonl_flag, &slices)? {
        let rows = slices
            .iter()
            .map(|s| vec![s.category.clone(), fmt_money(&s.total)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}

fn trend(store: &dyn BlobStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let transactions = store::load_transactions(store)?;
    let buckets = series::daily_trend(&transactions);
    if buckets.is_empty() {
        println!("No transaction data to display.");
        return Ok(());
    }
    if !maybe_print_json(json_flag, jsonl_flag, &buckets)? {
        let rows = buckets
            .iter()
            .map(|b| {
                vec![
                    b.date.to_string(),
                    fmt_money(&b.income),
                    fmt_money(&b.expense),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Date", "Income", "Expense"], rows));
    }
    Ok(())
}
