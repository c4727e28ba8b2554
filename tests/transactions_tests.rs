// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use smartbudget::models::{Transaction, TransactionType};
use smartbudget::store::{self, MemStore};
use smartbudget::{cli, commands::transactions};

fn setup() -> MemStore {
    let store = MemStore::default();
    let list = vec![
        Transaction {
            id: 3,
            date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            amount: "10".parse().unwrap(),
            category: "Food".to_string(),
            description: "Groceries".to_string(),
            r#type: TransactionType::Expense,
        },
        Transaction {
            id: 2,
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            amount: "15".parse().unwrap(),
            category: "Transportation".to_string(),
            description: "Bus pass".to_string(),
            r#type: TransactionType::Expense,
        },
        Transaction {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            amount: "1000".parse().unwrap(),
            category: "Income".to_string(),
            description: "Salary".to_string(),
            r#type: TransactionType::Income,
        },
    ];
    store::save_transactions(&store, &list).unwrap();
    store
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_limit_respected() {
    let store = setup();
    let m = list_matches(&["smartbudget", "tx", "list", "--limit", "2"]);
    let rows = transactions::query_rows(&store, &m).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 3); // ledger is newest first
}

#[test]
fn list_search_matches_description_and_category() {
    let store = setup();

    let m = list_matches(&["smartbudget", "tx", "list", "--search", "groc"]);
    let rows = transactions::query_rows(&store, &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Groceries");

    let m = list_matches(&["smartbudget", "tx", "list", "--search", "transport"]);
    let rows = transactions::query_rows(&store, &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 2);
}

#[test]
fn list_without_filters_returns_everything() {
    let store = setup();
    let m = list_matches(&["smartbudget", "tx", "list"]);
    let rows = transactions::query_rows(&store, &m).unwrap();
    assert_eq!(rows.len(), 3);
}
