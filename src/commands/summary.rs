// Copyright (c) 2025 Shopbook Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::dates::{current_month, month_label, month_of, shift_month};
use crate::ledger::Ledger;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn report(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    let owner_id = *m.get_one::<i64>("owner").unwrap();
    let mut month = m.get_one::<String>("month").cloned();
    let date = m.get_one::<String>("date").cloned();

    // Month navigation: --shift moves whatever month would be selected.
    if let Some(delta) = m.get_one::<i32>("shift") {
        let base = month
            .as_deref()
            .and_then(month_of)
            .or_else(|| date.as_deref().and_then(month_of))
            .unwrap_or_else(current_month);
        month = Some(shift_month(&base, *delta)?);
    }

    let summary = ledger.summary(owner_id, month.as_deref(), date.as_deref())?;
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &summary)? {
        return Ok(());
    }

    println!(
        "{}",
        pretty_table(
            &["Total Income", "Total Expense", "Net Profit"],
            vec![vec![
                fmt_money(&summary.totals.total_income),
                fmt_money(&summary.totals.total_expense),
                fmt_money(&summary.totals.net_profit),
            ]],
        )
    );

    println!("\n{}", month_label(&summary.monthly.month)?);
    println!(
        "{}",
        pretty_table(
            &["Income", "Expense", "Net Profit"],
            vec![vec![
                fmt_money(&summary.monthly.income),
                fmt_money(&summary.monthly.expense),
                fmt_money(&summary.monthly.net_profit),
            ]],
        )
    );

    if !summary.trend.is_empty() {
        let rows = summary
            .trend
            .iter()
            .map(|p| {
                vec![
                    p.date.to_string(),
                    fmt_money(&p.income),
                    fmt_money(&p.expense),
                    fmt_money(&p.net_profit),
                ]
            })
            .collect();
        println!("\nLast 30 days");
        println!("{}", pretty_table(&["Date", "Income", "Expense", "Net"], rows));
    }

    if !summary.recent_transactions.is_empty() {
        let rows = summary
            .recent_transactions
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.kind.to_string(),
                    fmt_money(&e.amount),
                    e.description.clone(),
                    e.payment_mode.clone(),
                    e.date.to_string(),
                    e.created_at.clone(),
                ]
            })
            .collect();
        println!("\nRecent activity");
        println!(
            "{}",
            pretty_table(
                &["ID", "Type", "Amount", "Description", "Mode", "Date", "Created"],
                rows,
            )
        );
    }
    Ok(())
}
