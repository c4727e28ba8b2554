// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::budget::{self, Month};
use crate::store::{self, BlobStore};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &dyn BlobStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub),
        Some(("list", sub)) => list(store, sub),
        Some(("report", sub)) => report(store, sub),
        _ => Ok(()),
    }
}

fn set(store: &dyn BlobStore, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap();
    let limit = parse_decimal(sub.get_one::<String>("limit").unwrap())?;
    let mut goals = store::load_goals(store)?;
    budget::set_goal(&mut goals, category, limit);
    store::save_goals(store, &goals)?;
    if limit > Decimal::ZERO {
        println!("Budget for {} set to {}", category, fmt_money(&limit));
    } else {
        println!("Budget for {} removed", category);
    }
    Ok(())
}

fn list(store: &dyn BlobStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let goals = store::load_goals(store)?;
    if goals.is_empty() {
        println!("No budget goals set.");
        return Ok(());
    }
    if !maybe_print_json(json_flag, jsonl_flag, &goals)? {
        let rows = goals
            .iter()
            .map(|g| vec![g.category.clone(), fmt_money(&g.limit)])
            .collect();
        println!("{}", pretty_table(&["Category", "Monthly limit"], rows));
    }
    Ok(())
}

fn report(store: &dyn BlobStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let transactions = store::load_transactions(store)?;
    let goals = store::load_goals(store)?;
    if goals.is_empty() {
        println!("No budget goals set.");
        return Ok(());
    }

    // The clock is read here at the edge; the evaluator itself is pure.
    let month = Month::of(chrono::Utc::now().date_naive());
    let statuses = budget::evaluate(&transactions, &goals, month);

    if !maybe_print_json(json_flag, jsonl_flag, &statuses)? {
        let rows = statuses
            .iter()
            .map(|s| {
                let status = if s.is_over_budget {
                    "over budget".to_string()
                } else {
                    s.level().as_str().to_string()
                };
                vec![
                    s.category.clone(),
                    fmt_money(&s.spent),
                    fmt_money(&s.limit),
                    format!("{:.0}%", s.percentage),
                    status,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Spent", "Limit", "Used", "Status"], rows)
        );
    }
    Ok(())
}
