// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::{ExpensePatch, NewExpense};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result, anyhow};
use regex::Regex;
use serde::Serialize;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("show", sub)) => show(ledger, sub)?,
        Some(("edit", sub)) => edit(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn resolve_category(ledger: &Ledger, id: &str) -> Result<String> {
    ledger
        .catalog()
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.id.clone())
        .ok_or_else(|| anyhow!("Category '{}' not found (see 'category list')", id))
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("desc").unwrap().to_string();
    let category = resolve_category(ledger, sub.get_one::<String>("category").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    let receipt_url = sub.get_one::<String>("receipt").map(|s| s.to_string());

    let record = ledger.create(NewExpense {
        amount,
        description,
        date,
        category,
        receipt_url,
    })?;
    println!(
        "Recorded {} for '{}' on {} (id {})",
        fmt_money(&record.amount),
        record.description,
        record.date,
        record.id
    );
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.receipt.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Amount", "Category", "Receipt"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub category: String,
    pub receipt: String,
}

/// Presentation-side listing: the engine hands back the full collection in
/// insertion order; category/regex filtering and the limit happen here.
pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<ExpenseRow>> {
    let category = sub.get_one::<String>("category");
    let search = match sub.get_one::<String>("search") {
        Some(pat) => {
            Some(Regex::new(pat).with_context(|| format!("Invalid search pattern '{}'", pat))?)
        }
        None => None,
    };
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    let mut data = Vec::new();
    for r in ledger.records() {
        if let Some(cat) = category {
            if &r.category != cat {
                continue;
            }
        }
        if let Some(ref re) = search {
            if !re.is_match(&r.description) {
                continue;
            }
        }
        data.push(ExpenseRow {
            id: r.id,
            date: r.date.to_string(),
            description: r.description.clone(),
            amount: fmt_money(&r.amount),
            category: r.category.clone(),
            receipt: r.receipt_url.clone().unwrap_or_default(),
        });
        if data.len() == limit {
            break;
        }
    }
    Ok(data)
}

fn show(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let r = ledger
        .get(id)
        .with_context(|| format!("Expense {} not found", id))?;
    let rows = vec![vec![
        r.id.to_string(),
        r.date.to_string(),
        r.description.clone(),
        fmt_money(&r.amount),
        r.category.clone(),
        r.receipt_url.clone().unwrap_or_default(),
    ]];
    println!(
        "{}",
        pretty_table(
            &["Id", "Date", "Description", "Amount", "Category", "Receipt"],
            rows,
        )
    );
    Ok(())
}

fn edit(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut patch = ExpensePatch::default();
    if let Some(a) = sub.get_one::<String>("amount") {
        patch.amount = Some(parse_decimal(a)?);
    }
    if let Some(d) = sub.get_one::<String>("desc") {
        patch.description = Some(d.to_string());
    }
    if let Some(d) = sub.get_one::<String>("date") {
        patch.date = Some(parse_date(d)?);
    }
    if let Some(c) = sub.get_one::<String>("category") {
        patch.category = Some(resolve_category(ledger, c)?);
    }
    if sub.get_flag("no-receipt") {
        patch.receipt_url = Some(None);
    } else if let Some(r) = sub.get_one::<String>("receipt") {
        patch.receipt_url = Some(Some(r.to_string()));
    }

    let updated = ledger.update(id, patch)?;
    println!(
        "Updated expense {}: {} for '{}' on {}",
        updated.id,
        fmt_money(&updated.amount),
        updated.description,
        updated.date
    );
    Ok(())
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if ledger.get(id).is_some() {
        ledger.delete(id);
        println!("Removed expense {}", id);
    } else {
        println!("No expense {} to remove", id);
    }
    Ok(())
}
