// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ExpenseRecord;
use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};

/// Well-known storage key for the ledger document.
const STATE_KEY: &str = "expense-ledger";

/// Envelope version this build reads and writes. Anything else loads as
/// empty state.
const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StateEnvelope {
    #[serde(default)]
    schema_version: u32,
    records: Vec<ExpenseRecord>,
}

/// Durable store for the full record collection. The whole ledger is one
/// JSON document under a single key; every save rewrites it.
pub struct StateStore {
    conn: Connection,
}

impl StateStore {
    pub fn new(conn: Connection) -> Self {
        StateStore { conn }
    }

    /// Restore the persisted record set. Missing state, an unreadable
    /// document, or an unknown schema version all degrade to an empty
    /// ledger; startup never fails on bad persisted state.
    pub fn load(&self) -> Vec<ExpenseRecord> {
        let raw: Option<String> = match self
            .conn
            .query_row(
                "SELECT value FROM state WHERE key=?1",
                params![STATE_KEY],
                |r| r.get(0),
            )
            .optional()
        {
            Ok(v) => v,
            Err(e) => {
                log::warn!("ledger state unreadable, starting empty: {}", e);
                return Vec::new();
            }
        };
        let Some(raw) = raw else {
            return Vec::new();
        };
        match serde_json::from_str::<StateEnvelope>(&raw) {
            Ok(env) if env.schema_version == SCHEMA_VERSION => env.records,
            Ok(env) => {
                log::warn!(
                    "ledger state has schema version {}, expected {}; starting empty",
                    env.schema_version,
                    SCHEMA_VERSION
                );
                Vec::new()
            }
            Err(e) => {
                log::warn!("ledger state failed to parse, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Serialize and durably write the full record sequence. A single-row
    /// upsert, so the previous document is replaced atomically.
    pub fn save(&self, records: &[ExpenseRecord]) -> Result<()> {
        let env = StateEnvelope {
            schema_version: SCHEMA_VERSION,
            records: records.to_vec(),
        };
        let doc = serde_json::to_string(&env).context("Serialize ledger state")?;
        self.conn
            .execute(
                "INSERT INTO state(key, value, updated_at) VALUES(?1, ?2, datetime('now'))
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=excluded.updated_at",
                params![STATE_KEY, doc],
            )
            .context("Write ledger state")?;
        Ok(())
    }

    /// Erase persisted state. In-memory records are untouched; the empty
    /// ledger takes effect on the next load.
    pub fn clear(&self) -> Result<()> {
        self.conn
            .execute("DELETE FROM state WHERE key=?1", params![STATE_KEY])
            .context("Clear ledger state")?;
        Ok(())
    }
}
