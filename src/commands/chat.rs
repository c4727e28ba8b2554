// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::assistant::Assistant;
use crate::store::{self, BlobStore};

pub fn handle(store: &dyn BlobStore, assistant: &dyn Assistant, m: &clap::ArgMatches) -> Result<()> {
    let question = m
        .get_many::<String>("question")
        .unwrap()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let transactions = store::load_transactions(store)?;
    // Best-effort: the assistant degrades to a fixed reply on any failure.
    println!("{}", assistant.analyze(&transactions, &question));
    Ok(())
}
