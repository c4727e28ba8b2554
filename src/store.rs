// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{BudgetGoal, Transaction};

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const BUDGET_GOALS_KEY: &str = "budget_goals";

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "SmartBudget", "smartbudget"));

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read blob '{key}': {source}")]
    Read { key: String, source: io::Error },
    #[error("could not write blob '{key}': {source}")]
    Write { key: String, source: io::Error },
}

/// Opaque key-value blob persistence. The aggregation layer never touches
/// this; commands load lists through it and hand them around as plain slices.
pub trait BlobStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StoreError>;
}

/// One `<key>.json` file per key under the platform data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open_default() -> Result<Self> {
        let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
            .context("Could not determine platform-specific data dir")?;
        let dir = proj.data_dir().to_path_buf();
        fs::create_dir_all(&dir).context("Failed to create data dir")?;
        Ok(Self { dir })
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StoreError> {
        fs::write(self.path_for(key), blob).map_err(|e| StoreError::Write {
            key: key.to_string(),
            source: e,
        })
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl BlobStore for MemStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let blobs = self.blobs.lock().unwrap_or_else(|e| e.into_inner());
        Ok(blobs.get(key).cloned())
    }

    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StoreError> {
        let mut blobs = self.blobs.lock().unwrap_or_else(|e| e.into_inner());
        blobs.insert(key.to_string(), blob.to_vec());
        Ok(())
    }
}

fn load_list<T: DeserializeOwned>(store: &dyn BlobStore, key: &str) -> Result<Vec<T>> {
    let Some(blob) = store
        .load(key)
        .with_context(|| format!("Load blob '{}'", key))?
    else {
        return Ok(Vec::new());
    };
    // A corrupt blob starts over from an empty list instead of failing.
    Ok(serde_json::from_slice(&blob).unwrap_or_default())
}

fn save_list<T: Serialize>(store: &dyn BlobStore, key: &str, items: &[T]) -> Result<()> {
    let blob = serde_json::to_vec_pretty(items)
        .with_context(|| format!("Serialize blob '{}'", key))?;
    store
        .save(key, &blob)
        .with_context(|| format!("Save blob '{}'", key))
}

pub fn load_transactions(store: &dyn BlobStore) -> Result<Vec<Transaction>> {
    load_list(store, TRANSACTIONS_KEY)
}

pub fn save_transactions(store: &dyn BlobStore, transactions: &[Transaction]) -> Result<()> {
    save_list(store, TRANSACTIONS_KEY, transactions)
}

pub fn load_goals(store: &dyn BlobStore) -> Result<Vec<BudgetGoal>> {
    load_list(store, BUDGET_GOALS_KEY)
}

/// Goals are normalized on the way in: last entry per category wins and
/// non-positive limits are dropped, so the evaluator never sees either.
pub fn save_goals(store: &dyn BlobStore, goals: &[BudgetGoal]) -> Result<()> {
    let mut deduped: Vec<BudgetGoal> = Vec::new();
    for goal in goals.iter().filter(|g| g.limit > Decimal::ZERO) {
        deduped.retain(|kept| kept.category != goal.category);
        deduped.push(goal.clone());
    }
    save_list(store, BUDGET_GOALS_KEY, &deduped)
}

/// Ids are assigned on create and never reused while the ledger lives.
pub fn next_id(transactions: &[Transaction]) -> i64 {
    transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1
}
