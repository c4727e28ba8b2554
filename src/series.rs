// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TransactionType};

/// The trend window counts active days (days with at least one transaction),
/// not calendar days, so sparse histories still fill the chart.
pub const TREND_DAYS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySlice {
    pub category: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Expense totals per category, largest first. Income transactions are
/// excluded. An empty result means "no expense data", which consumers must
/// render explicitly instead of drawing an empty chart.
pub fn category_distribution(transactions: &[Transaction]) -> Vec<CategorySlice> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for t in transactions {
        if t.r#type == TransactionType::Expense {
            *totals.entry(t.category.as_str()).or_insert(Decimal::ZERO) += t.amount;
        }
    }
    let mut slices: Vec<CategorySlice> = totals
        .into_iter()
        .map(|(category, total)| CategorySlice {
            category: category.to_string(),
            total,
        })
        .collect();
    slices.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));
    slices
}

/// Per-day income and expense sums for the last `TREND_DAYS` active days,
/// oldest first. Buckets are keyed on the canonical `NaiveDate` value, so two
/// entries for the same calendar day can never split into separate buckets.
pub fn daily_trend(transactions: &[Transaction]) -> Vec<DayBucket> {
    let mut days: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for t in transactions {
        let bucket = days.entry(t.date).or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.r#type {
            TransactionType::Income => bucket.0 += t.amount,
            TransactionType::Expense => bucket.1 += t.amount,
        }
    }
    let skip = days.len().saturating_sub(TREND_DAYS);
    days.into_iter()
        .skip(skip)
        .map(|(date, (income, expense))| DayBucket {
            date,
            income,
            expense,
        })
        .collect()
}
