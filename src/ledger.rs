// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::{FALLBACK_COLOR, UNCATEGORIZED};
use crate::models::{
    CategoryDefinition, CategoryTotal, ExpensePatch, ExpenseRecord, MonthlyTotal, NewExpense,
};
use crate::state::StateStore;
use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("expense {0} not found")]
    NotFound(i64),
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("description must not be empty")]
    EmptyDescription,
}

/// The expense ledger: the in-memory record collection plus its
/// write-through store, with aggregation queries recomputed from the live
/// snapshot on every call.
///
/// Records are kept newest-inserted-first; that order, not the `date`
/// field, is the default list order. Exactly one `Ledger` owns the state;
/// callers receive a reference rather than going through a global.
pub struct Ledger {
    records: Vec<ExpenseRecord>,
    next_id: i64,
    catalog: Vec<CategoryDefinition>,
    store: StateStore,
}

impl Ledger {
    /// Restore the ledger from `store` (empty on missing or unreadable
    /// state) with the given category catalog.
    pub fn open(store: StateStore, catalog: Vec<CategoryDefinition>) -> Ledger {
        let records = store.load();
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Ledger {
            records,
            next_id,
            catalog,
            store,
        }
    }

    pub fn catalog(&self) -> &[CategoryDefinition] {
        &self.catalog
    }

    /// Full collection, newest-inserted-first. Filtering, searching and
    /// re-sorting are the caller's concern.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Validate, assign a fresh id, insert at the front and persist.
    pub fn create(&mut self, input: NewExpense) -> Result<ExpenseRecord, LedgerError> {
        validate_amount(input.amount)?;
        validate_description(&input.description)?;
        let record = ExpenseRecord {
            id: self.next_id,
            amount: input.amount,
            description: input.description,
            date: input.date,
            category: input.category,
            receipt_url: input.receipt_url,
        };
        self.next_id += 1;
        self.records.insert(0, record.clone());
        self.persist();
        Ok(record)
    }

    /// Merge `patch` into the record with `id`; absent fields stay as they
    /// are. Patched fields are validated before anything is applied, so a
    /// rejected patch leaves the record untouched.
    pub fn update(&mut self, id: i64, patch: ExpensePatch) -> Result<ExpenseRecord, LedgerError> {
        if let Some(amount) = patch.amount {
            validate_amount(amount)?;
        }
        if let Some(ref description) = patch.description {
            validate_description(description)?;
        }
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        if let Some(amount) = patch.amount {
            record.amount = amount;
        }
        if let Some(description) = patch.description {
            record.description = description;
        }
        if let Some(date) = patch.date {
            record.date = date;
        }
        if let Some(category) = patch.category {
            record.category = category;
        }
        if let Some(receipt_url) = patch.receipt_url {
            record.receipt_url = receipt_url;
        }
        let updated = record.clone();
        self.persist();
        Ok(updated)
    }

    /// Remove the record with `id`; silently a no-op when absent.
    pub fn delete(&mut self, id: i64) {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() != before {
            self.persist();
        }
    }

    /// Sum of all amounts, regardless of date.
    pub fn total_to_date(&self) -> Decimal {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Totals for the `window` most recent calendar months (local time),
    /// newest first. See [`Ledger::monthly_totals_asof`].
    pub fn monthly_totals(&self, window: usize) -> Vec<MonthlyTotal> {
        self.monthly_totals_asof(window, Local::now().date_naive())
    }

    /// Totals for `window` consecutive calendar months ending at the month
    /// of `today`, newest first, every bucket present even when zero.
    /// Buckets are keyed by (year, month) so abbreviated labels can never
    /// collide across years; records outside the window are ignored.
    pub fn monthly_totals_asof(&self, window: usize, today: NaiveDate) -> Vec<MonthlyTotal> {
        let mut buckets: Vec<((i32, u32), Decimal)> = (0..window)
            .map(|back| (months_back(today.year(), today.month(), back), Decimal::ZERO))
            .collect();
        for record in &self.records {
            let key = (record.date.year(), record.date.month());
            if let Some(bucket) = buckets.iter_mut().find(|(k, _)| *k == key) {
                bucket.1 += record.amount;
            }
        }
        buckets
            .into_iter()
            .map(|((year, month), total)| MonthlyTotal {
                month: month_label(year, month),
                total,
            })
            .collect()
    }

    /// Per-category accumulation over the whole ledger: every catalog
    /// category starts at zero, exact-zero totals are dropped, and the rest
    /// are sorted by total descending (ties keep catalog order). Amounts
    /// referencing an id outside the catalog land in a synthetic
    /// "(uncategorized)" entry, so the reported totals always sum to
    /// [`Ledger::total_to_date`].
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = self
            .catalog
            .iter()
            .map(|c| CategoryTotal {
                category: c.id.clone(),
                total: Decimal::ZERO,
                color: c.color.clone(),
            })
            .collect();
        let mut unknown = Decimal::ZERO;
        for record in &self.records {
            match totals.iter_mut().find(|t| t.category == record.category) {
                Some(entry) => entry.total += record.amount,
                None => unknown += record.amount,
            }
        }
        if unknown != Decimal::ZERO {
            totals.push(CategoryTotal {
                category: UNCATEGORIZED.into(),
                total: unknown,
                color: FALLBACK_COLOR.into(),
            });
        }
        totals.retain(|t| t.total != Decimal::ZERO);
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        totals
    }

    /// Erase persisted state only; in-memory records stay live until the
    /// process exits.
    pub fn clear_persisted(&self) -> anyhow::Result<()> {
        self.store.clear()
    }

    // Write-through: applied after every successful mutation. A failed save
    // keeps the in-memory state and is reported as a non-fatal warning.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.records) {
            log::warn!("ledger save failed, in-memory state kept: {:#}", e);
        }
    }
}

fn validate_amount(amount: Decimal) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount);
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), LedgerError> {
    if description.trim().is_empty() {
        return Err(LedgerError::EmptyDescription);
    }
    Ok(())
}

/// The (year, month) pair `back` calendar months before the given month.
fn months_back(year: i32, month: u32, back: usize) -> (i32, u32) {
    let total = year as i64 * 12 + month as i64 - 1 - back as i64;
    (
        total.div_euclid(12) as i32,
        (total.rem_euclid(12) + 1) as u32,
    )
}

/// Abbreviated display label, e.g. "Dec 24".
fn month_label(year: i32, month: u32) -> String {
    let abbr = match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    };
    format!("{} {:02}", abbr, year.rem_euclid(100))
}
