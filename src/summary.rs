// Copyright (c) 2025 Shopbook Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::dates;
use crate::error::Result;
use crate::models::{EntryKind, MonthlySummary, Summary, Totals, TrendPoint};
use crate::store::EntryStore;

/// Recent-activity feed cap.
pub const RECENT_LIMIT: u32 = 40;

/// Trend window: the 30 calendar days ending today, inclusive.
pub const TREND_DAYS: i64 = 30;

/// Round a derived net figure to 2 decimal places, half away from zero.
/// Raw sums are never rounded; only net differences and per-day trend
/// buckets are.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Build the summary for one owner. `today` is passed explicitly so the
/// trend window and month fallback are pinnable in tests; production
/// callers pass `dates::today()`.
pub fn build_summary(
    store: &EntryStore,
    owner_id: i64,
    month: Option<&str>,
    date: Option<&str>,
    today: NaiveDate,
) -> Result<Summary> {
    // Month param wins over date; both fall back to the current month.
    let selected_month = month
        .and_then(dates::month_of)
        .or_else(|| date.and_then(dates::month_of))
        .unwrap_or_else(|| today.format("%Y-%m").to_string());

    let total_income = store.sum_all(EntryKind::Income, owner_id)?;
    let total_expense = store.sum_all(EntryKind::Expense, owner_id)?;

    let monthly_income = store.sum_for_month(EntryKind::Income, owner_id, &selected_month)?;
    let monthly_expense = store.sum_for_month(EntryKind::Expense, owner_id, &selected_month)?;

    let since = today - Duration::days(TREND_DAYS - 1);
    let income_by_day = store.daily_totals(EntryKind::Income, owner_id, since)?;
    let expense_by_day = store.daily_totals(EntryKind::Expense, owner_id, since)?;

    // Merge by date; a date present in only one collection gets zero for
    // the other side. The series stays sparse.
    let mut merged: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for (date, total) in income_by_day {
        merged.entry(date).or_insert((Decimal::ZERO, Decimal::ZERO)).0 = round2(total);
    }
    for (date, total) in expense_by_day {
        merged.entry(date).or_insert((Decimal::ZERO, Decimal::ZERO)).1 = round2(total);
    }
    let trend = merged
        .into_iter()
        .map(|(date, (income, expense))| TrendPoint {
            date,
            income,
            expense,
            net_profit: round2(income - expense),
        })
        .collect();

    let recent_transactions = store.recent_merged(owner_id, RECENT_LIMIT)?;

    Ok(Summary {
        totals: Totals {
            total_income,
            total_expense,
            net_profit: round2(total_income - total_expense),
        },
        monthly: MonthlySummary {
            month: selected_month,
            income: monthly_income,
            expense: monthly_expense,
            net_profit: round2(monthly_income - monthly_expense),
        },
        trend,
        recent_transactions,
    })
}
