// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as pretty JSON")
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print as JSON lines")
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .value_parser(value_parser!(i64))
        .help("Expense id")
}

pub fn build_cli() -> Command {
    Command::new("outlay")
        .about("Personal expense ledger with monthly and category spending reports")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the database and print its location"))
        .subcommand(
            Command::new("tx")
                .about("Record and manage expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record a new expense")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Amount spent, e.g. 12.50"),
                        )
                        .arg(
                            Arg::new("desc")
                                .long("desc")
                                .required(true)
                                .help("What the expense was for"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category id (see 'category list')"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Date of the expense, YYYY-MM-DD (default: today)"),
                        )
                        .arg(
                            Arg::new("receipt")
                                .long("receipt")
                                .help("Reference to an attached receipt"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List expenses, newest first")
                        .arg(Arg::new("category").long("category").help("Only this category id"))
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Only descriptions matching this regex"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Show at most this many"),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(Command::new("show").about("Show one expense").arg(id_arg()))
                .subcommand(
                    Command::new("edit")
                        .about("Change fields of an expense")
                        .arg(id_arg())
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("desc").long("desc"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("receipt").long("receipt"))
                        .arg(
                            Arg::new("no-receipt")
                                .long("no-receipt")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("receipt")
                                .help("Detach the receipt"),
                        ),
                )
                .subcommand(Command::new("rm").about("Delete an expense").arg(id_arg())),
        )
        .subcommand(
            Command::new("category")
                .about("Spending categories")
                .subcommand(Command::new("list").about("List the category catalog")),
        )
        .subcommand(
            Command::new("report")
                .about("Spending summaries")
                .subcommand(
                    Command::new("total")
                        .about("Total spent to date")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("monthly")
                        .about("Totals for the most recent calendar months")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(usize))
                                .help("Window size (default 6)"),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("by-category")
                        .about("Spending broken down by category")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("export").about("Export the ledger").subcommand(
                Command::new("records")
                    .about("Write all expenses to a file")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .required(true)
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true).help("Output path")),
            ),
        )
        .subcommand(Command::new("doctor").about("Audit the ledger for suspicious records"))
        .subcommand(
            Command::new("reset")
                .about("Erase all persisted ledger state")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm the wipe"),
                ),
        )
}
