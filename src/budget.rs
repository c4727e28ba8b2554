// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{BudgetGoal, Transaction, TransactionType};

/// A calendar month, injected into the evaluator so its output is a pure
/// function of its arguments. Production callers build it from the system
/// clock at the CLI edge; tests pin it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar-field comparison. Never routed through a timestamp, which
    /// could shift a date across a timezone boundary.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    /// Usage clamped to [0, 100]. Overspend is still visible through
    /// `is_over_budget`, which compares the unclamped values.
    pub percentage: Decimal,
    pub is_over_budget: bool,
}

impl BudgetStatus {
    pub fn level(&self) -> UsageLevel {
        usage_level(self.percentage)
    }
}

/// Presentation policy for budget usage. This drives the user-facing
/// warning colors and must stay fixed: >= 90 critical, 75..90 warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    Normal,
    Warning,
    Critical,
}

impl UsageLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageLevel::Normal => "normal",
            UsageLevel::Warning => "warning",
            UsageLevel::Critical => "critical",
        }
    }
}

pub fn usage_level(percentage: Decimal) -> UsageLevel {
    if percentage >= Decimal::from(90) {
        UsageLevel::Critical
    } else if percentage >= Decimal::from(75) {
        UsageLevel::Warning
    } else {
        UsageLevel::Normal
    }
}

/// Evaluate every goal against the expenses of `month`, highest usage first.
///
/// Callers guarantee `limit > 0` for every goal; a zero limit is a degenerate
/// input this function is not required to handle.
pub fn evaluate(
    transactions: &[Transaction],
    goals: &[BudgetGoal],
    month: Month,
) -> Vec<BudgetStatus> {
    let monthly: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense && month.contains(t.date))
        .collect();

    let mut statuses: Vec<BudgetStatus> = goals
        .iter()
        .map(|goal| {
            let spent: Decimal = monthly
                .iter()
                .filter(|t| t.category == goal.category)
                .map(|t| t.amount)
                .sum();
            let percentage = (spent / goal.limit * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED);
            BudgetStatus {
                category: goal.category.clone(),
                limit: goal.limit,
                spent,
                percentage,
                is_over_budget: spent > goal.limit,
            }
        })
        .collect();

    // sort_by is stable, so equal percentages keep the original goal order.
    statuses.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    statuses
}

/// Reassign or remove a category's goal in place. A later entry for the same
/// category replaces the earlier one; a non-positive limit removes it.
pub fn set_goal(goals: &mut Vec<BudgetGoal>, category: &str, limit: Decimal) {
    goals.retain(|g| g.category != category);
    if limit > Decimal::ZERO {
        goals.push(BudgetGoal {
            category: category.to_string(),
            limit,
        });
    }
}
