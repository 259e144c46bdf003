// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::resolve_today;
use crate::config::Policy;
use crate::insights::{Insights, SpendSummary, compute_insights_with_policy, spend_summary};
use crate::models::Transaction;
use crate::snapshot::{load_snapshot, load_transactions_csv};
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use anyhow::{Result, bail};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct InsightsReport {
    #[serde(flatten)]
    pub insights: Insights,
    pub spending: SpendSummary,
}

pub fn handle(policy: &Policy, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let transactions = load_ledger(sub)?;
    let today = resolve_today(sub)?;
    let report = InsightsReport {
        insights: compute_insights_with_policy(&transactions, policy),
        spending: spend_summary(&transactions, today),
    };
    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    let ins = &report.insights;
    println!(
        "{}",
        pretty_table(
            &["Summary", "Value"],
            vec![
                vec!["Spent today".into(), fmt_money(&report.spending.today)],
                vec!["Spent overall".into(), fmt_money(&report.spending.total)],
                vec![
                    format!("Small spends (< {})", fmt_money(&policy.small_spend_threshold)),
                    format!(
                        "{} across {} transactions",
                        fmt_money(&ins.black_hole.total),
                        ins.black_hole.count
                    ),
                ],
            ],
        )
    );

    let subs: Vec<Vec<String>> = ins
        .subscriptions
        .iter()
        .map(|s| {
            vec![
                fmt_money(&s.amount),
                s.count.to_string(),
                s.description.clone(),
                s.category.clone(),
            ]
        })
        .collect();
    if subs.is_empty() {
        println!("No recurring amounts detected");
    } else {
        println!(
            "{}",
            pretty_table(&["Amount", "Times", "Description", "Category"], subs)
        );
    }

    let cats: Vec<Vec<String>> = ins
        .category_breakdown
        .iter()
        .map(|c| {
            vec![
                c.category.clone(),
                fmt_money(&c.amount),
                fmt_percent(&c.percent),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], cats));
    Ok(())
}

/// Transactions from `--snapshot` or `--csv`; exactly one must be given.
pub fn load_ledger(sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let snapshot = sub.get_one::<String>("snapshot");
    let csv = sub.get_one::<String>("csv");
    match (snapshot, csv) {
        (Some(path), None) => Ok(load_snapshot(Path::new(path.trim()))?.transactions),
        (None, Some(path)) => load_transactions_csv(Path::new(path.trim())),
        (Some(_), Some(_)) => bail!("Use either --snapshot or --csv, not both"),
        (None, None) => bail!("One of --snapshot or --csv is required"),
    }
}
