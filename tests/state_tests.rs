// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use outlay::catalog;
use outlay::ledger::Ledger;
use outlay::models::{ExpensePatch, ExpenseRecord, NewExpense};
use outlay::state::StateStore;
use rusqlite::Connection;
use rust_decimal_macros::dec;
use std::path::Path;

const STATE_DDL: &str = "CREATE TABLE IF NOT EXISTS state(key TEXT PRIMARY KEY, value TEXT NOT NULL, updated_at TEXT NOT NULL DEFAULT (datetime('now')));";

fn open_at(path: &Path) -> Connection {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(STATE_DDL).unwrap();
    conn
}

fn expense(amount: rust_decimal::Decimal, date: &str, category: &str) -> NewExpense {
    NewExpense {
        amount,
        description: format!("{} expense", category),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        category: category.into(),
        receipt_url: None,
    }
}

fn raw_state(path: &Path) -> Option<String> {
    let conn = Connection::open(path).unwrap();
    conn.query_row(
        "SELECT value FROM state WHERE key='expense-ledger'",
        [],
        |r| r.get(0),
    )
    .ok()
}

#[test]
fn reload_reconstructs_the_record_set() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("outlay.sqlite");

    let mut ledger = Ledger::open(StateStore::new(open_at(&db)), catalog::builtin());
    let mut input = expense(dec!(25.50), "2024-12-01", "food");
    input.receipt_url = Some("receipts/7.jpg".into());
    ledger.create(input).unwrap();
    ledger.create(expense(dec!(15.00), "2024-11-15", "transport")).unwrap();
    let before: Vec<ExpenseRecord> = ledger.records().to_vec();
    drop(ledger);

    let reloaded = Ledger::open(StateStore::new(open_at(&db)), catalog::builtin());
    assert_eq!(reloaded.records(), before.as_slice());
}

#[test]
fn ids_stay_unique_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("outlay.sqlite");

    let mut ledger = Ledger::open(StateStore::new(open_at(&db)), catalog::builtin());
    let a = ledger.create(expense(dec!(1.00), "2025-01-01", "food")).unwrap();
    let b = ledger.create(expense(dec!(2.00), "2025-01-02", "food")).unwrap();
    drop(ledger);

    let mut reloaded = Ledger::open(StateStore::new(open_at(&db)), catalog::builtin());
    let c = reloaded.create(expense(dec!(3.00), "2025-01-03", "food")).unwrap();
    assert!(c.id > a.id && c.id > b.id);
}

#[test]
fn save_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("outlay.sqlite");

    let records = vec![ExpenseRecord {
        id: 1,
        amount: dec!(9.99),
        description: "coffee".into(),
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        category: "food".into(),
        receipt_url: None,
    }];
    let store = StateStore::new(open_at(&db));
    store.save(&records).unwrap();
    let first = raw_state(&db).unwrap();
    store.save(&records).unwrap();
    let second = raw_state(&db).unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_mutation_writes_through() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("outlay.sqlite");

    let mut ledger = Ledger::open(StateStore::new(open_at(&db)), catalog::builtin());
    let created = ledger.create(expense(dec!(4.00), "2025-02-01", "food")).unwrap();
    let reader = StateStore::new(open_at(&db));
    assert_eq!(reader.load().len(), 1);

    ledger
        .update(
            created.id,
            ExpensePatch {
                amount: Some(dec!(6.00)),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(reader.load()[0].amount, dec!(6.00));

    ledger.delete(created.id);
    assert!(reader.load().is_empty());
}

#[test]
fn missing_state_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("outlay.sqlite");
    let ledger = Ledger::open(StateStore::new(open_at(&db)), catalog::builtin());
    assert!(ledger.records().is_empty());
}

#[test]
fn corrupt_state_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("outlay.sqlite");

    let conn = open_at(&db);
    conn.execute(
        "INSERT INTO state(key, value) VALUES('expense-ledger', 'not json at all')",
        [],
    )
    .unwrap();

    let ledger = Ledger::open(StateStore::new(conn), catalog::builtin());
    assert!(ledger.records().is_empty());
}

#[test]
fn unknown_schema_version_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("outlay.sqlite");

    let conn = open_at(&db);
    conn.execute(
        "INSERT INTO state(key, value) VALUES('expense-ledger',
         '{\"schema_version\": 99, \"records\": [{\"id\": 1, \"amount\": \"5.00\", \"description\": \"x\", \"date\": \"2025-01-01\", \"category\": \"food\", \"receipt_url\": null}]}')",
        [],
    )
    .unwrap();

    let ledger = Ledger::open(StateStore::new(conn), catalog::builtin());
    assert!(ledger.records().is_empty());
}

#[test]
fn clear_erases_persisted_state_only() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("outlay.sqlite");

    let mut ledger = Ledger::open(StateStore::new(open_at(&db)), catalog::builtin());
    ledger.create(expense(dec!(5.00), "2025-01-01", "food")).unwrap();

    ledger.clear_persisted().unwrap();
    // Live records survive until the process ends
    assert_eq!(ledger.records().len(), 1);
    assert!(raw_state(&db).is_none());

    drop(ledger);
    let reloaded = Ledger::open(StateStore::new(open_at(&db)), catalog::builtin());
    assert!(reloaded.records().is_empty());
}
