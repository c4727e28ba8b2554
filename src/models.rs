// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed category set. The editing surface (CLI argument validation and the
/// assistant's category snapping) keeps records inside this set; the
/// aggregation layer treats categories as opaque labels.
pub const CATEGORIES: [&str; 12] = [
    "Housing",
    "Food",
    "Transportation",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Shopping",
    "Personal",
    "Education",
    "Savings",
    "Income",
    "Other",
];

pub const FALLBACK_CATEGORY: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

/// A recorded financial event. `amount` is always non-negative; the
/// budgetary direction is carried by `type`, never by the amount's sign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub r#type: TransactionType,
}

/// A per-category spending ceiling for the current calendar month. At most
/// one goal per category; non-positive limits never reach the evaluator
/// (the store drops them on save).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetGoal {
    pub category: String,
    pub limit: Decimal,
}
