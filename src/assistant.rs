// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;

use crate::models::{Transaction, CATEGORIES, FALLBACK_CATEGORY};
use crate::utils::http_client;

pub const MODEL: &str = "gemini-2.5-flash";
const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Fixed fallback replies. The assistant is best-effort by contract: it never
// propagates an error to the caller, it degrades to one of these.
pub const MISSING_KEY_REPLY: &str =
    "I need an API key to function. Please set GEMINI_API_KEY in the environment.";
pub const ERROR_REPLY: &str = "Sorry, I encountered an error while analyzing your budget.";
pub const EMPTY_REPLY: &str = "I couldn't generate a response.";

/// Capability port for the external language model. Both operations are
/// total: on any failure (no credential, HTTP error, empty completion) they
/// return a fixed fallback instead of an error.
pub trait Assistant {
    fn analyze(&self, transactions: &[Transaction], question: &str) -> String;
    fn categorize(&self, description: &str) -> String;
}

/// Conversational-analysis prompt: the ledger serialized to JSON plus the
/// user's question and a fixed instruction block.
pub fn analysis_prompt(transactions: &[Transaction], question: &str) -> String {
    let records: Vec<serde_json::Value> = transactions
        .iter()
        .map(|t| {
            json!({
                "date": t.date.to_string(),
                "amount": t.amount,
                "category": t.category,
                "type": t.r#type.as_str(),
                "description": t.description,
            })
        })
        .collect();
    let data = serde_json::Value::Array(records).to_string();

    format!(
        "You are a smart financial assistant.\n\
         Here is the user's transaction history in JSON format:\n\
         {data}\n\n\
         User Question: {question}\n\n\
         Instructions:\n\
         1. Analyze the data to answer the user's specific question.\n\
         2. If the user asks for general advice, look for patterns (e.g., high spending in one category).\n\
         3. Be concise and friendly. Format key numbers in bold.\n\
         4. Do not output raw JSON, provide a conversational response.\n"
    )
}

pub fn category_prompt(description: &str) -> String {
    format!(
        "Categorize this transaction description into one of these categories: [{}]. \
         Return ONLY the category name. Description: \"{}\"",
        CATEGORIES.join(", "),
        description
    )
}

/// Snap a free-text model answer onto the fixed category set; anything
/// unrecognized becomes the fallback.
pub fn snap_category(raw: &str) -> String {
    let raw = raw.trim();
    CATEGORIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(raw))
        .map(|c| (*c).to_string())
        .unwrap_or_else(|| FALLBACK_CATEGORY.to_string())
}

pub struct GeminiAssistant {
    api_key: Option<String>,
}

impl GeminiAssistant {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Reads `GEMINI_API_KEY`, falling back to the legacy `API_KEY` name.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .ok(),
        )
    }

    fn complete(&self, api_key: &str, prompt: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct Reply {
            candidates: Option<Vec<Candidate>>,
        }
        #[derive(Deserialize)]
        struct Candidate {
            content: Option<Content>,
        }
        #[derive(Deserialize)]
        struct Content {
            parts: Option<Vec<Part>>,
        }
        #[derive(Deserialize)]
        struct Part {
            text: Option<String>,
        }

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        let url = format!("{ENDPOINT}/{MODEL}:generateContent");
        let client = http_client()?;
        let resp = client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .context("Gemini request failed")?
            .error_for_status()
            .context("Gemini returned an error status")?;
        let reply: Reply = resp.json().context("Parse Gemini response")?;

        let mut text = String::new();
        for candidate in reply.candidates.unwrap_or_default() {
            let parts = candidate.content.and_then(|c| c.parts).unwrap_or_default();
            for part in parts {
                if let Some(t) = part.text {
                    text.push_str(&t);
                }
            }
        }
        Ok(text.trim().to_string())
    }
}

impl Assistant for GeminiAssistant {
    fn analyze(&self, transactions: &[Transaction], question: &str) -> String {
        let Some(key) = &self.api_key else {
            return MISSING_KEY_REPLY.to_string();
        };
        match self.complete(key, &analysis_prompt(transactions, question)) {
            Ok(text) if text.is_empty() => EMPTY_REPLY.to_string(),
            Ok(text) => text,
            Err(_) => ERROR_REPLY.to_string(),
        }
    }

    fn categorize(&self, description: &str) -> String {
        let Some(key) = &self.api_key else {
            return FALLBACK_CATEGORY.to_string();
        };
        match self.complete(key, &category_prompt(description)) {
            Ok(text) => snap_category(&text),
            Err(_) => FALLBACK_CATEGORY.to_string(),
        }
    }
}
