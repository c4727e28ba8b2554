// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::builder::PossibleValuesParser;
use clap::{arg, value_parser, ArgAction, Command};

use crate::models::CATEGORIES;

fn with_output_flags(c: Command) -> Command {
    c.arg(arg!(--json "Output pretty JSON").action(ArgAction::SetTrue))
        .arg(arg!(--jsonl "Output JSON Lines").action(ArgAction::SetTrue))
}

fn category_parser() -> PossibleValuesParser {
    PossibleValuesParser::new(CATEGORIES)
}

pub fn build_cli() -> Command {
    Command::new("smartbudget")
        .about("Income/expense tracking, monthly category budgets, and AI-assisted insight")
        .subcommand(Command::new("init").about("Initialize the data directory"))
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(arg!(--date <DATE> "Date YYYY-MM-DD (default: today)"))
                        .arg(arg!(--amount <AMOUNT> "Non-negative amount").required(true))
                        .arg(
                            arg!(--category <CATEGORY> "Category (default: AI suggestion)")
                                .value_parser(category_parser()),
                        )
                        .arg(arg!(--description <TEXT> "What this was for").required(true))
                        .arg(
                            arg!(--type <TYPE> "income or expense")
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        ),
                )
                .subcommand(with_output_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            arg!(--limit <N> "Show at most N rows")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(arg!(--search <TEXT> "Filter by description or category")),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Update a transaction in place (id is immutable)")
                        .arg(arg!(<id> "Transaction id").value_parser(value_parser!(i64)))
                        .arg(arg!(--date <DATE>))
                        .arg(arg!(--amount <AMOUNT>))
                        .arg(arg!(--category <CATEGORY>).value_parser(category_parser()))
                        .arg(arg!(--description <TEXT>))
                        .arg(arg!(--type <TYPE>).value_parser(["income", "expense"])),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(arg!(<id> "Transaction id").value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly per-category spending limits")
                .subcommand(
                    Command::new("set")
                        .about("Set a category's monthly limit (0 removes it)")
                        .arg(arg!(<category> "Category").value_parser(category_parser()))
                        .arg(arg!(<limit> "Monthly limit")),
                )
                .subcommand(with_output_flags(
                    Command::new("list").about("List configured goals"),
                ))
                .subcommand(with_output_flags(
                    Command::new("report").about("Current-month spend against each goal"),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregate views over the ledger")
                .subcommand(with_output_flags(
                    Command::new("summary").about("Total income, total expense, balance"),
                ))
                .subcommand(with_output_flags(
                    Command::new("spend-by-category").about("Expense composition by category"),
                ))
                .subcommand(with_output_flags(
                    Command::new("trend").about("Income/expense for the last 7 active days"),
                )),
        )
        .subcommand(
            Command::new("ask")
                .about("Ask the AI assistant about your transactions")
                .arg(arg!(<question> "Free-text question").num_args(1..)),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export the transaction list")
                    .arg(
                        arg!(--format <FMT> "Output format")
                            .value_parser(["csv", "json"])
                            .default_value("csv"),
                    )
                    .arg(arg!(--out <PATH> "Output file path").required(true)),
            ),
        )
}
