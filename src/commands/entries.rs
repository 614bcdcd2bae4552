// Copyright (c) 2025 Shopbook Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::models::{EntryKind, NewEntry};
use crate::utils::{fmt_money, maybe_print_json, parse_amount};

pub fn add(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    let kind: EntryKind = m.get_one::<String>("kind").unwrap().parse()?;
    let owner_id = *m.get_one::<i64>("owner").unwrap();
    let amount = parse_amount(m.get_one::<String>("amount").unwrap())?;
    let input = NewEntry {
        amount,
        description: m.get_one::<String>("description").cloned(),
        payment_mode: m.get_one::<String>("mode").cloned(),
        date: m.get_one::<String>("date").cloned(),
    };
    let entry = ledger.add_entry(owner_id, kind, input)?;
    if !maybe_print_json(m.get_flag("json"), false, &entry)? {
        println!(
            "Recorded {} #{} of {} on {} ({})",
            entry.kind,
            entry.id,
            fmt_money(&entry.amount),
            entry.date,
            entry.payment_mode
        );
    }
    Ok(())
}

pub fn delete(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    let kind: EntryKind = m.get_one::<String>("kind").unwrap().parse()?;
    let owner_id = *m.get_one::<i64>("owner").unwrap();
    let id = *m.get_one::<i64>("id").unwrap();
    ledger.delete_entry(owner_id, kind, id)?;
    println!("Deleted {} #{}", kind, id);
    Ok(())
}
