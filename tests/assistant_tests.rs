// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use smartbudget::assistant::{
    analysis_prompt, category_prompt, snap_category, Assistant, GeminiAssistant,
    MISSING_KEY_REPLY,
};
use smartbudget::models::{Transaction, TransactionType, FALLBACK_CATEGORY};

fn tx() -> Transaction {
    Transaction {
        id: 1,
        date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        amount: "200".parse().unwrap(),
        category: "Food".to_string(),
        description: "Weekly groceries".to_string(),
        r#type: TransactionType::Expense,
    }
}

#[test]
fn snap_category_normalizes_onto_fixed_set() {
    assert_eq!(snap_category("Food"), "Food");
    assert_eq!(snap_category("  food \n"), "Food");
    assert_eq!(snap_category("HEALTHCARE"), "Healthcare");
    assert_eq!(snap_category("Cryptocurrency"), FALLBACK_CATEGORY);
    assert_eq!(snap_category(""), FALLBACK_CATEGORY);
}

#[test]
fn category_prompt_lists_the_fixed_set() {
    let p = category_prompt("uber to airport");
    assert!(p.contains("Housing, Food, Transportation"));
    assert!(p.contains("uber to airport"));
    assert!(p.contains("Return ONLY the category name"));
}

#[test]
fn analysis_prompt_embeds_ledger_and_question() {
    let p = analysis_prompt(&[tx()], "Where does my money go?");
    assert!(p.contains("\"2024-05-02\""));
    assert!(p.contains("Weekly groceries"));
    assert!(p.contains("\"expense\""));
    assert!(p.contains("User Question: Where does my money go?"));
    // the id is internal and never shipped to the model
    assert!(!p.contains("\"id\""));
}

#[test]
fn missing_credential_degrades_to_fixed_replies() {
    let assistant = GeminiAssistant::new(None);
    assert_eq!(assistant.analyze(&[tx()], "anything"), MISSING_KEY_REPLY);
    assert_eq!(assistant.categorize("coffee"), FALLBACK_CATEGORY);

    // an empty key counts as absent
    let assistant = GeminiAssistant::new(Some(String::new()));
    assert_eq!(assistant.analyze(&[], "anything"), MISSING_KEY_REPLY);
    assert_eq!(assistant.categorize("coffee"), FALLBACK_CATEGORY);
}
