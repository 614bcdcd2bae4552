// Copyright (c) 2025 Shopbook Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::dates::{self, parse_entry_date};
use crate::error::{LedgerError, Result};
use crate::models::{Entry, EntryKind, NewEntry, Summary};
use crate::store::EntryStore;
use crate::summary;

/// The public contract: add income, add expense, delete by kind+id, fetch
/// a summary. Validates and normalizes caller input, then delegates; it
/// never computes business numbers itself.
///
/// Every operation takes the owner id explicitly. Owner scoping is a
/// required argument rather than ambient state so per-owner isolation
/// stays visible at every call site.
pub struct Ledger {
    store: EntryStore,
}

impl Ledger {
    pub fn new(store: EntryStore) -> Self {
        Ledger { store }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn add_income(&self, owner_id: i64, input: NewEntry) -> Result<Entry> {
        self.add_entry(owner_id, EntryKind::Income, input)
    }

    pub fn add_expense(&self, owner_id: i64, input: NewEntry) -> Result<Entry> {
        self.add_entry(owner_id, EntryKind::Expense, input)
    }

    /// Validate, normalize, then perform the single insert. Either the
    /// whole entry persists or nothing does.
    pub fn add_entry(&self, owner_id: i64, kind: EntryKind, input: NewEntry) -> Result<Entry> {
        if input.amount <= Decimal::ZERO {
            return Err(LedgerError::invalid("Amount must be greater than 0"));
        }
        let entry_date = match input.date.as_deref() {
            Some(value) => parse_entry_date(value)?,
            None => dates::today(),
        };
        let description = normalize_or(input.description, "none provided");
        let payment_mode = normalize_or(input.payment_mode, "cash");
        self.store
            .add_entry(kind, owner_id, input.amount, &description, &payment_mode, entry_date)
    }

    /// Delete the entry at (kind, id) for this owner. A missing row, an id
    /// that only exists under the other kind, and another owner's row are
    /// all reported identically as not found.
    pub fn delete_entry(&self, owner_id: i64, kind: EntryKind, id: i64) -> Result<()> {
        if id <= 0 {
            return Err(LedgerError::invalid("Invalid transaction id"));
        }
        if self.store.delete_entry(kind, owner_id, id)? {
            Ok(())
        } else {
            Err(LedgerError::NotFound)
        }
    }

    /// Summary for the month resolved from `month` (preferred) or `date`,
    /// falling back to the current month.
    pub fn summary(&self, owner_id: i64, month: Option<&str>, date: Option<&str>) -> Result<Summary> {
        self.summary_as_of(owner_id, month, date, dates::today())
    }

    /// Same as [`Ledger::summary`] with an explicit "today", for callers
    /// that need a pinned clock.
    pub fn summary_as_of(
        &self,
        owner_id: i64,
        month: Option<&str>,
        date: Option<&str>,
        today: NaiveDate,
    ) -> Result<Summary> {
        summary::build_summary(&self.store, owner_id, month, date, today)
    }
}

fn normalize_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                fallback.to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => fallback.to_string(),
    }
}
