// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TransactionType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

/// Fold the transaction list into overall totals. Input order is irrelevant.
/// `balance` is derived from the two totals after the fold, so
/// `balance == total_income - total_expense` holds exactly; there is no
/// independent accumulation path that could round differently.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    for t in transactions {
        match t.r#type {
            TransactionType::Income => total_income += t.amount,
            TransactionType::Expense => total_expense += t.amount,
        }
    }
    Summary {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}
