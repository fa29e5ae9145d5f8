// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print a pretty JSON array instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("wallettrack")
        .about("Personal income/expense tracking with monthly budgets and recurring transactions")
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("kind").long("kind").required(true).help("income|expense"))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true).help("Category name"))
                        .arg(Arg::new("desc").long("desc").required(true))
                        .arg(Arg::new("recurring").long("recurring").help("weekly|monthly|yearly"))
                        .arg(Arg::new("next-due").long("next-due").help("First due date; defaults to one period after --date")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("kind").long("kind").help("income|expense"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Update fields of a transaction")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("kind").long("kind"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("desc").long("desc"))
                        .arg(Arg::new("recurring").long("recurring").help("none|weekly|monthly|yearly"))
                        .arg(Arg::new("next-due").long("next-due")),
                )
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories and their monthly budgets")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("kind").long("kind").required(true).help("income|expense"))
                        .arg(Arg::new("color").long("color").help("Hex display color"))
                        .arg(Arg::new("budget").long("budget").help("Monthly budget, expense categories only")),
                )
                .subcommand(Command::new("list"))
                .subcommand(
                    Command::new("edit")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("rename").long("rename"))
                        .arg(Arg::new("color").long("color"))
                        .arg(Arg::new("budget").long("budget"))
                        .arg(
                            Arg::new("clear-budget")
                                .long("clear-budget")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(
                    Command::new("rm").arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views of the ledger")
                .subcommand(
                    Command::new("summary")
                        .about("Dashboard: balances, current-month figures, budget usage")
                        .arg(Arg::new("currency").long("currency").help("Display currency code"))
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("breakdown")
                        .about("Per-category totals for one month")
                        .arg(Arg::new("month").long("month").help("YYYY-MM, default current")),
                ))
                .subcommand(json_flags(
                    Command::new("cashflow")
                        .about("Income vs expense per month")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("recurring")
                .about("Recurring transaction templates")
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("process")
                        .about("Materialize every template due on or before today")
                        .arg(Arg::new("today").long("today").help("Override the reference date (YYYY-MM-DD)")),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export the ledger")
                .subcommand(
                    Command::new("transactions")
                        .arg(Arg::new("format").long("format").required(true).help("csv|json"))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check the ledger for suspicious state"))
}
