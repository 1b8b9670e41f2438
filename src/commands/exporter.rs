// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use anyhow::{Result, anyhow};
use serde_json::json;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("records", sub)) => export_records(ledger, sub),
        _ => Ok(()),
    }
}

fn export_records(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "amount", "description", "category", "receipt_url"])?;
            for r in ledger.records() {
                wtr.write_record([
                    r.id.to_string(),
                    r.date.to_string(),
                    r.amount.to_string(),
                    r.description.clone(),
                    r.category.clone(),
                    r.receipt_url.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for r in ledger.records() {
                items.push(json!({
                    "id": r.id,
                    "date": r.date.to_string(),
                    "amount": r.amount.to_string(),
                    "description": r.description,
                    "category": r.category,
                    "receipt_url": r.receipt_url,
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            return Err(anyhow!("Unknown format: {} (use csv|json)", fmt));
        }
    }
    println!("Exported {} records to {}", ledger.records().len(), out);
    Ok(())
}
