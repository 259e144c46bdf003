// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::resolve_today;
use crate::config::Policy;
use crate::gauge::{GaugeResult, compute_gauge_with_policy};
use crate::models::SalaryConfig;
use crate::snapshot::load_snapshot;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Result, anyhow};
use std::path::Path;

pub fn handle(policy: &Policy, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let cfg = salary_from_args(sub)?;
    let today = resolve_today(sub)?;
    let result = compute_gauge_with_policy(cfg.amount, cfg.balance, cfg.pay_day, today, policy);
    if !maybe_print_json(json_flag, jsonl_flag, &result)? {
        println!("{}", render(&result));
    }
    Ok(())
}

/// Salary configuration from either `--snapshot` or the three explicit flags.
pub fn salary_from_args(sub: &clap::ArgMatches) -> Result<SalaryConfig> {
    if let Some(path) = sub.get_one::<String>("snapshot") {
        let snapshot = load_snapshot(Path::new(path.trim()))?;
        return Ok(snapshot.salary()?.clone());
    }
    let salary = sub
        .get_one::<String>("salary")
        .ok_or_else(|| anyhow!("--salary is required without --snapshot"))?;
    let balance = sub
        .get_one::<String>("balance")
        .ok_or_else(|| anyhow!("--balance is required without --snapshot"))?;
    let pay_day = *sub
        .get_one::<u32>("pay-day")
        .ok_or_else(|| anyhow!("--pay-day is required without --snapshot"))?;
    let cfg = SalaryConfig::with_balance(parse_decimal(salary)?, pay_day, parse_decimal(balance)?)?;
    Ok(cfg)
}

pub fn render(result: &GaugeResult) -> comfy_table::Table {
    pretty_table(
        &["Metric", "Value"],
        vec![
            vec!["Zone".into(), result.zone.to_string()],
            vec![
                "Days until payday".into(),
                result.days_until_payday.to_string(),
            ],
            vec!["Day of cycle".into(), result.days_elapsed.to_string()],
            vec!["Time left".into(), fmt_percent(&result.days_left_percent)],
            vec!["Money left".into(), fmt_percent(&result.money_left_percent)],
            vec!["Daily budget".into(), fmt_money(&result.daily_burn_rate)],
        ],
    )
}
