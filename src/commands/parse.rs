// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::resolve_today;
use crate::config::Policy;
use crate::gauge::{GaugeResult, compute_gauge_with_policy};
use crate::models::{ParsedExpense, TransactionType};
use crate::parser::parse_quick_add;
use crate::snapshot::load_snapshot;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct ParsePreview {
    pub parsed: ParsedExpense,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_after: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gauge_after: Option<GaugeResult>,
}

pub fn handle(policy: &Policy, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let text = input_text(sub);
    let preview = match sub.get_one::<String>("snapshot") {
        Some(path) => {
            let today = resolve_today(sub)?;
            preview_against(policy, &text, Path::new(path.trim()), today)?
        }
        None => {
            let parsed = parse_quick_add(&text);
            ParsePreview {
                valid: parsed.is_valid(),
                parsed,
                balance_after: None,
                gauge_after: None,
            }
        }
    };

    if maybe_print_json(json_flag, jsonl_flag, &preview)? {
        return Ok(());
    }
    let mut rows = vec![
        vec!["Amount".into(), fmt_money(&preview.parsed.amount)],
        vec!["Category".into(), preview.parsed.category.to_string()],
        vec!["Description".into(), preview.parsed.description.clone()],
    ];
    if let Some(bal) = &preview.balance_after {
        rows.push(vec!["Balance after".into(), fmt_money(bal)]);
    }
    if let Some(g) = &preview.gauge_after {
        rows.push(vec!["Zone after".into(), g.zone.to_string()]);
        rows.push(vec!["Daily budget after".into(), fmt_money(&g.daily_burn_rate)]);
    }
    println!("{}", pretty_table(&["Field", "Value"], rows));
    if !preview.valid {
        eprintln!("No amount found; this entry would be rejected.");
    }
    Ok(())
}

fn input_text(sub: &clap::ArgMatches) -> String {
    sub.get_many::<String>("TEXT")
        .map(|vals| vals.map(|s| s.as_str()).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

/// What-if: the balance and gauge the snapshot would show once the parsed
/// entry is recorded as an expense. Nothing is written back.
pub fn preview_against(
    policy: &Policy,
    text: &str,
    snapshot_path: &Path,
    today: NaiveDate,
) -> Result<ParsePreview> {
    let snapshot = load_snapshot(snapshot_path)?;
    let mut cfg = snapshot.salary()?.clone();
    let parsed = parse_quick_add(text);
    let valid = parsed.is_valid();
    if !valid {
        return Ok(ParsePreview {
            parsed,
            valid,
            balance_after: None,
            gauge_after: None,
        });
    }

    let next_id = snapshot
        .transactions
        .iter()
        .map(|t| t.id)
        .max()
        .unwrap_or(0)
        + 1;
    let tx = parsed.clone().into_transaction(
        next_id,
        TransactionType::Expense,
        today.and_time(chrono::NaiveTime::MIN),
    )?;
    cfg.record(&tx);
    let gauge = compute_gauge_with_policy(cfg.amount, cfg.balance, cfg.pay_day, today, policy);
    Ok(ParsePreview {
        parsed,
        valid,
        balance_after: Some(cfg.balance),
        gauge_after: Some(gauge),
    })
}
