// Copyright (c) 2025 Shopbook Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use shopbook::{cli, commands, db, ledger::Ledger, store::EntryStore};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;
    let ledger = Ledger::new(EntryStore::new(conn));

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("add", sub)) => commands::entries::add(&ledger, sub)?,
        Some(("delete", sub)) => commands::entries::delete(&ledger, sub)?,
        Some(("summary", sub)) => commands::summary::report(&ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
