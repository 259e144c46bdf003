// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Command, arg, value_parser};

fn output_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print pretty JSON instead of a table"))
        .arg(arg!(--jsonl "Print one JSON object per line"))
}

pub fn build_cli() -> Command {
    Command::new("burnrate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Payday burn-rate gauge, quick-add parser, and spending insights")
        .arg(arg!(--policy <PATH> "Policy JSON (defaults to the platform config dir)").global(true))
        .subcommand(output_flags(
            Command::new("parse")
                .about("Parse a quick-add line such as \"250 for uber to office\"")
                .arg(arg!(<TEXT>... "Free text to parse"))
                .arg(arg!(--snapshot <PATH> "Preview the entry against this snapshot"))
                .arg(arg!(--today <DATE> "Date for the preview (YYYY-MM-DD)")),
        ))
        .subcommand(output_flags(
            Command::new("gauge")
                .about("Show whether spending pace lasts until payday")
                .arg(arg!(--salary <AMOUNT> "Monthly salary"))
                .arg(arg!(--balance <AMOUNT> "Current balance, negative when overdrawn").allow_negative_numbers(true))
                .arg(arg!(--"pay-day" <DAY> "Day of month salary arrives").value_parser(value_parser!(u32)))
                .arg(arg!(--snapshot <PATH> "Read salary configuration from a snapshot"))
                .arg(arg!(--today <DATE> "Evaluate as of this date (YYYY-MM-DD)")),
        ))
        .subcommand(output_flags(
            Command::new("insights")
                .about("Small spends, likely subscriptions, and category breakdown")
                .arg(arg!(--snapshot <PATH> "Snapshot JSON with transactions"))
                .arg(arg!(--csv <PATH> "CSV export: id,date,type,amount,category,description"))
                .arg(arg!(--today <DATE> "Day used for the spent-today figure (YYYY-MM-DD)")),
        ))
        .subcommand(output_flags(
            Command::new("categories").about("List categories and their trigger keywords"),
        ))
}
