// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

// The engine tolerates records that predate validation (or arrived through
// hand-edited state); doctor surfaces them without touching anything.
pub fn handle(ledger: &Ledger) -> Result<()> {
    let mut rows = Vec::new();

    let known: HashSet<&str> = ledger.catalog().iter().map(|c| c.id.as_str()).collect();
    let mut seen_ids = HashSet::new();

    for r in ledger.records() {
        if !known.contains(r.category.as_str()) {
            rows.push(vec![
                "unknown_category".into(),
                format!("id {} -> '{}'", r.id, r.category),
            ]);
        }
        if r.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".into(),
                format!("id {} -> {}", r.id, r.amount),
            ]);
        }
        if r.description.trim().is_empty() {
            rows.push(vec!["empty_description".into(), format!("id {}", r.id)]);
        }
        if !seen_ids.insert(r.id) {
            rows.push(vec!["duplicate_id".into(), format!("id {}", r.id)]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
