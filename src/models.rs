// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single recorded expense. `id` is assigned by the ledger at creation and
/// never changes; `date` is when the expense occurred, not when it was
/// entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
    pub category: String,
    pub receipt_url: Option<String>,
}

/// Creation input: an expense without an id.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
    pub category: String,
    pub receipt_url: Option<String>,
}

/// Partial update. Absent fields are left unchanged. `receipt_url` is
/// doubly-optional so a patch can clear the receipt (`Some(None)`) as well
/// as replace it.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub receipt_url: Option<Option<String>>,
}

/// Static reference data describing one spending category. The catalog is
/// fixed for the process lifetime; records reference entries by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Derived monthly bucket, e.g. `{ month: "Dec 24", total: 25.50 }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: String,
    pub total: Decimal,
}

/// Derived per-category accumulation; only nonzero categories are reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
    pub color: String,
}
