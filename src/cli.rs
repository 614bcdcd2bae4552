// Copyright (c) 2025 Shopbook Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn owner_arg() -> Arg {
    Arg::new("owner")
        .long("owner")
        .required(true)
        .value_parser(value_parser!(i64))
        .help("Caller identity (owner id) supplied by the auth layer")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of a table")
}

fn jsonl_arg() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print compact single-line JSON")
}

fn kind_arg() -> Arg {
    Arg::new("kind")
        .required(true)
        .value_parser(["income", "expense"])
}

pub fn build_cli() -> Command {
    Command::new("shopbook")
        .about("Per-owner income/expense ledger with monthly summaries and trends")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database if needed and print its location"))
        .subcommand(
            Command::new("add")
                .about("Record an income or expense entry")
                .arg(kind_arg())
                .arg(owner_arg())
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .help("Positive decimal amount"),
                )
                .arg(Arg::new("description").long("description"))
                .arg(Arg::new("mode").long("mode").help("Payment mode, e.g. cash, upi, card"))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Attribution date YYYY-MM-DD, defaults to today"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an entry by kind and id")
                .arg(kind_arg())
                .arg(Arg::new("id").required(true).value_parser(value_parser!(i64)))
                .arg(owner_arg()),
        )
        .subcommand(
            Command::new("summary")
                .about("Totals, selected-month breakdown, 30-day trend, and recent activity")
                .arg(owner_arg())
                .arg(Arg::new("month").long("month").help("Selected month YYYY-MM"))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Any date in the selected month (YYYY-MM-DD); --month wins"),
                )
                .arg(
                    Arg::new("shift")
                        .long("shift")
                        .allow_hyphen_values(true)
                        .value_parser(value_parser!(i32))
                        .help("Shift the selected month by N months (e.g. -1 for previous)"),
                )
                .arg(json_arg())
                .arg(jsonl_arg()),
        )
}
