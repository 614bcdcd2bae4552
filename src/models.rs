// Copyright (c) 2025 Shopbook Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// The two entry collections. Income and expense rows live in parallel
/// tables and are only unified at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    pub(crate) fn table(&self) -> &'static str {
        match self {
            EntryKind::Income => "incomes",
            EntryKind::Expense => "expenses",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            _ => Err(LedgerError::invalid("type must be income or expense")),
        }
    }
}

/// One persisted income or expense record, tagged with its kind.
///
/// `date` is the attribution date of the money event; `created_at` is the
/// persistence timestamp and only drives recency ordering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(skip_serializing)]
    pub owner_id: i64,
    pub amount: Decimal,
    pub description: String,
    pub payment_mode: String,
    pub date: NaiveDate,
    pub created_at: String,
}

/// Caller input for an add operation, before normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub amount: Decimal,
    pub description: Option<String>,
    pub payment_mode: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_profit: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub net_profit: Decimal,
}

/// One merged point of the trailing daily trend. Dates with no entries in
/// either collection are absent, not zero-filled.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
    pub net_profit: Decimal,
}

/// The aggregate response for one (owner, selected month) request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub totals: Totals,
    pub monthly: MonthlySummary,
    pub trend: Vec<TrendPoint>,
    pub recent_transactions: Vec<Entry>,
}
