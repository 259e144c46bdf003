// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;

use burnrate::{cli, commands, config, utils};

fn main() -> Result<()> {
    utils::init_tracing();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let policy = config::load_policy(
        matches
            .get_one::<String>("policy")
            .map(|p| Path::new(p.trim())),
    )?;

    match matches.subcommand() {
        Some(("parse", sub)) => commands::parse::handle(&policy, sub)?,
        Some(("gauge", sub)) => commands::gauge::handle(&policy, sub)?,
        Some(("insights", sub)) => commands::insights::handle(&policy, sub)?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
