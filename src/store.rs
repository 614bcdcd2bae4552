// Copyright (c) 2025 Shopbook Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;

use crate::db;
use crate::error::Result;
use crate::models::{Entry, EntryKind};

/// Owner-scoped persistence for the two entry collections. Every query
/// filters on `owner_id`; the aggregator relies on that invariant instead
/// of performing its own permission checks.
pub struct EntryStore {
    conn: Connection,
}

impl EntryStore {
    /// Wrap an already-initialized connection (see `db::open_or_init`).
    pub fn new(conn: Connection) -> Self {
        EntryStore { conn }
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        db::init_schema(&conn)?;
        Ok(EntryStore { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Single insert; re-reads the persisted row so the caller sees the
    /// assigned id and storage-stamped `created_at`.
    pub fn add_entry(
        &self,
        kind: EntryKind,
        owner_id: i64,
        amount: Decimal,
        description: &str,
        payment_mode: &str,
        entry_date: NaiveDate,
    ) -> Result<Entry> {
        self.conn.execute(
            &format!(
                "INSERT INTO {}(owner_id, amount, description, payment_mode, entry_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                kind.table()
            ),
            params![
                owner_id,
                amount.to_string(),
                description,
                payment_mode,
                entry_date
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        self.get_entry(kind, owner_id, id)
    }

    pub fn get_entry(&self, kind: EntryKind, owner_id: i64, id: i64) -> Result<Entry> {
        let entry = self.conn.query_row(
            &format!(
                "SELECT id, amount, description, payment_mode, entry_date, created_at
                 FROM {} WHERE id = ?1 AND owner_id = ?2",
                kind.table()
            ),
            params![id, owner_id],
            |r| map_entry(r, kind, owner_id),
        )?;
        Ok(entry)
    }

    /// Conditional delete on the kind's table only. Returns whether a row
    /// was removed; an id under the wrong kind or owner removes nothing.
    pub fn delete_entry(&self, kind: EntryKind, owner_id: i64, id: i64) -> Result<bool> {
        let changed = self.conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1 AND owner_id = ?2", kind.table()),
            params![id, owner_id],
        )?;
        Ok(changed > 0)
    }

    /// All-time total for one owner and kind, zero when empty.
    pub fn sum_all(&self, kind: EntryKind, owner_id: i64) -> Result<Decimal> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT amount FROM {} WHERE owner_id = ?1",
            kind.table()
        ))?;
        let mut rows = stmt.query(params![owner_id])?;
        let mut total = Decimal::ZERO;
        while let Some(r) = rows.next()? {
            total += decimal_column(r, 0)?;
        }
        Ok(total)
    }

    /// Total of entries whose attribution date falls in the given
    /// `YYYY-MM` month.
    pub fn sum_for_month(&self, kind: EntryKind, owner_id: i64, month: &str) -> Result<Decimal> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT amount FROM {} WHERE owner_id = ?1 AND substr(entry_date, 1, 7) = ?2",
            kind.table()
        ))?;
        let mut rows = stmt.query(params![owner_id, month])?;
        let mut total = Decimal::ZERO;
        while let Some(r) = rows.next()? {
            total += decimal_column(r, 0)?;
        }
        Ok(total)
    }

    /// Per-date sums for entries with `entry_date >= since`. The map is
    /// keyed by attribution date, so iteration is already ascending.
    pub fn daily_totals(
        &self,
        kind: EntryKind,
        owner_id: i64,
        since: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, Decimal>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT entry_date, amount FROM {} WHERE owner_id = ?1 AND entry_date >= ?2",
            kind.table()
        ))?;
        let mut rows = stmt.query(params![owner_id, since])?;
        let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        while let Some(r) = rows.next()? {
            let date: NaiveDate = r.get(0)?;
            let amount = decimal_column(r, 1)?;
            *totals.entry(date).or_insert(Decimal::ZERO) += amount;
        }
        Ok(totals)
    }

    /// Both kinds unioned and tagged, newest first by `created_at` (id as
    /// a tiebreak within a table), truncated to `limit`.
    pub fn recent_merged(&self, owner_id: i64, limit: u32) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, 'income' AS kind, amount, description, payment_mode, entry_date, created_at
             FROM incomes WHERE owner_id = ?1
             UNION ALL
             SELECT id, 'expense', amount, description, payment_mode, entry_date, created_at
             FROM expenses WHERE owner_id = ?1
             ORDER BY created_at DESC, id DESC
             LIMIT ?2",
        )?;
        let mut rows = stmt.query(params![owner_id, limit])?;
        let mut entries = Vec::new();
        while let Some(r) = rows.next()? {
            let kind_text: String = r.get(1)?;
            let kind = if kind_text == "income" {
                EntryKind::Income
            } else {
                EntryKind::Expense
            };
            entries.push(Entry {
                id: r.get(0)?,
                kind,
                owner_id,
                amount: decimal_column(r, 2)?,
                description: r.get(3)?,
                payment_mode: r.get(4)?,
                date: r.get(5)?,
                created_at: r.get(6)?,
            });
        }
        Ok(entries)
    }
}

fn map_entry(r: &Row, kind: EntryKind, owner_id: i64) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: r.get(0)?,
        kind,
        owner_id,
        amount: decimal_column(r, 1)?,
        description: r.get(2)?,
        payment_mode: r.get(3)?,
        date: r.get(4)?,
        created_at: r.get(5)?,
    })
}

fn decimal_column(r: &Row, idx: usize) -> rusqlite::Result<Decimal> {
    let text: String = r.get(idx)?;
    text.parse::<Decimal>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
