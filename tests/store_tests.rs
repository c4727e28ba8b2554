// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use smartbudget::models::{BudgetGoal, Transaction, TransactionType};
use smartbudget::store::{self, BlobStore, FileStore, TRANSACTIONS_KEY};

fn tx(id: i64, date: &str, amount: &str) -> Transaction {
    Transaction {
        id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        amount: amount.parse().unwrap(),
        category: "Food".to_string(),
        description: format!("tx {}", id),
        r#type: TransactionType::Expense,
    }
}

#[test]
fn file_store_roundtrips_transactions() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::at(dir.path());
    let list = vec![tx(1, "2024-05-01", "9.99"), tx(2, "2024-05-02", "12.50")];
    store::save_transactions(&store, &list).unwrap();
    let loaded = store::load_transactions(&store).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, 1);
    assert_eq!(loaded[1].amount, Decimal::new(1250, 2));
    assert_eq!(loaded[1].r#type, TransactionType::Expense);
}

#[test]
fn missing_blob_loads_as_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::at(dir.path());
    assert!(store::load_transactions(&store).unwrap().is_empty());
    assert!(store::load_goals(&store).unwrap().is_empty());
}

#[test]
fn corrupt_blob_loads_as_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::at(dir.path());
    store.save(TRANSACTIONS_KEY, b"{ definitely not json ]").unwrap();
    assert!(store::load_transactions(&store).unwrap().is_empty());
}

#[test]
fn goals_dedupe_last_write_wins_and_drop_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::at(dir.path());
    let goals = vec![
        BudgetGoal {
            category: "Food".to_string(),
            limit: Decimal::from(250),
        },
        BudgetGoal {
            category: "Shopping".to_string(),
            limit: Decimal::ZERO,
        },
        BudgetGoal {
            category: "Food".to_string(),
            limit: Decimal::from(300),
        },
    ];
    store::save_goals(&store, &goals).unwrap();
    let loaded = store::load_goals(&store).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].category, "Food");
    assert_eq!(loaded[0].limit, Decimal::from(300));
}

#[test]
fn next_id_is_monotonic_over_gaps() {
    assert_eq!(store::next_id(&[]), 1);
    let list = vec![tx(3, "2024-05-01", "1"), tx(7, "2024-05-02", "1")];
    assert_eq!(store::next_id(&list), 8);
}
