// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use serde_json::json;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("total", sub)) => total(ledger, sub)?,
        Some(("monthly", sub)) => monthly(ledger, sub)?,
        Some(("by-category", sub)) => by_category(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn total(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let total = ledger.total_to_date();
    if !maybe_print_json(json_flag, jsonl_flag, &json!({ "total": total }))? {
        println!("Total spent to date: {}", fmt_money(&total));
    }
    Ok(())
}

fn monthly(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&6);
    let data = ledger.monthly_totals(months);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|b| vec![b.month.clone(), fmt_money(&b.total)])
            .collect();
        println!("{}", pretty_table(&["Month", "Total"], rows));
    }
    Ok(())
}

fn by_category(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = ledger.category_totals();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|c| {
                let name = ledger
                    .catalog()
                    .iter()
                    .find(|d| d.id == c.category)
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| c.category.clone());
                vec![name, fmt_money(&c.total)]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}
