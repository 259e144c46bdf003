// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use burnrate::cli;
use burnrate::commands::{categories, gauge, insights, parse};
use burnrate::config::Policy;
use burnrate::gauge::Zone;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

fn snapshot_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
        "salary": {{"amount": 30000, "payDay": 25, "balance": 15000}},
        "transactions": [
            {{"id": 4, "amount": 199, "category": "Entertainment", "description": "Prime", "type": "EXPENSE", "date": "2025-06-09T08:00:00"}},
            {{"id": 3, "amount": 40, "category": "Food", "description": "Tea", "type": "EXPENSE", "date": "2025-06-08T17:00:00"}},
            {{"id": 2, "amount": 199, "category": "Entertainment", "description": "Prime", "type": "EXPENSE", "date": "2025-05-09T08:00:00"}},
            {{"id": 1, "amount": 30000, "category": "Others", "description": "Salary", "type": "INCOME", "date": "2025-05-25T09:00:00"}}
        ]
    }}"#
    )
    .unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn gauge_reads_explicit_flags_with_trimming() {
    let matches = cli::build_cli().get_matches_from([
        "burnrate",
        "gauge",
        "--salary",
        " 30000 ",
        "--balance",
        "15000",
        "--pay-day",
        "25",
        "--today",
        " 2025-06-10 ",
    ]);
    if let Some(("gauge", sub)) = matches.subcommand() {
        let cfg = gauge::salary_from_args(sub).unwrap();
        assert_eq!(cfg.amount, Decimal::from(30000));
        assert_eq!(cfg.pay_day, 25);
        let today = burnrate::commands::resolve_today(sub).unwrap();
        assert_eq!(today, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
    } else {
        panic!("gauge command not parsed");
    }
}

#[test]
fn gauge_requires_salary_without_snapshot() {
    let matches = cli::build_cli().get_matches_from(["burnrate", "gauge", "--balance", "10"]);
    if let Some(("gauge", sub)) = matches.subcommand() {
        let err = gauge::salary_from_args(sub).unwrap_err();
        assert!(err.to_string().contains("--salary"));
    } else {
        panic!("gauge command not parsed");
    }
}

#[test]
fn gauge_rejects_invalid_pay_day_flag() {
    let matches = cli::build_cli().get_matches_from([
        "burnrate",
        "gauge",
        "--salary",
        "30000",
        "--balance",
        "100",
        "--pay-day",
        "0",
    ]);
    if let Some(("gauge", sub)) = matches.subcommand() {
        let err = gauge::salary_from_args(sub).unwrap_err();
        assert!(err.to_string().contains("Pay day"));
    } else {
        panic!("gauge command not parsed");
    }
}

#[test]
fn gauge_accepts_overdrawn_balance_flag() {
    let matches = cli::build_cli().get_matches_from([
        "burnrate",
        "gauge",
        "--salary",
        "30000",
        "--balance",
        "-500",
        "--pay-day",
        "25",
    ]);
    if let Some(("gauge", sub)) = matches.subcommand() {
        let cfg = gauge::salary_from_args(sub).unwrap();
        assert_eq!(cfg.balance, Decimal::from(-500));
    } else {
        panic!("gauge command not parsed");
    }
}

#[test]
fn gauge_reads_snapshot() {
    let file = snapshot_file();
    let path = file.path().to_str().unwrap().to_string();
    let matches = cli::build_cli().get_matches_from(["burnrate", "gauge", "--snapshot", &path]);
    if let Some(("gauge", sub)) = matches.subcommand() {
        let cfg = gauge::salary_from_args(sub).unwrap();
        assert_eq!(cfg.balance, Decimal::from(15000));
    } else {
        panic!("gauge command not parsed");
    }
}

#[test]
fn insights_loads_snapshot_or_csv_but_not_both() {
    let file = snapshot_file();
    let path = file.path().to_str().unwrap().to_string();

    let matches =
        cli::build_cli().get_matches_from(["burnrate", "insights", "--snapshot", &path, "--json"]);
    if let Some(("insights", sub)) = matches.subcommand() {
        assert!(sub.get_flag("json"));
        let txs = insights::load_ledger(sub).unwrap();
        let ins = burnrate::compute_insights(&txs);
        assert_eq!(ins.subscriptions.len(), 1);
        assert_eq!(ins.subscriptions[0].description, "Prime");
        assert_eq!(ins.black_hole.count, 1);
    } else {
        panic!("insights command not parsed");
    }

    let both = cli::build_cli().get_matches_from([
        "burnrate",
        "insights",
        "--snapshot",
        &path,
        "--csv",
        "ledger.csv",
    ]);
    if let Some(("insights", sub)) = both.subcommand() {
        assert!(insights::load_ledger(sub).is_err());
    } else {
        panic!("insights command not parsed");
    }
}

#[test]
fn parse_joins_words_and_previews_against_snapshot() {
    let file = snapshot_file();
    let matches =
        cli::build_cli().get_matches_from(["burnrate", "parse", "6000", "for", "uber", "rides"]);
    let Some(("parse", sub)) = matches.subcommand() else {
        panic!("parse command not parsed");
    };
    let words: Vec<&String> = sub.get_many::<String>("TEXT").unwrap().collect();
    assert_eq!(words.len(), 4);

    let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let preview =
        parse::preview_against(&Policy::default(), "6000 for uber rides", file.path(), today)
            .unwrap();
    assert!(preview.valid);
    assert_eq!(preview.balance_after, Some(Decimal::from(9000)));
    let g = preview.gauge_after.unwrap();
    // 9000 of 30000 is 30% with 50% of the cycle left
    assert_eq!(g.zone, Zone::Danger);
    assert_eq!(g.daily_burn_rate, Decimal::from(600));
}

#[test]
fn parse_preview_skips_invalid_entries() {
    let file = snapshot_file();
    let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let preview =
        parse::preview_against(&Policy::default(), "lunch with team", file.path(), today).unwrap();
    assert!(!preview.valid);
    assert!(preview.balance_after.is_none());
    assert!(preview.gauge_after.is_none());
}

#[test]
fn global_policy_flag_reaches_subcommands() {
    let matches = cli::build_cli().get_matches_from([
        "burnrate",
        "categories",
        "--policy",
        " custom.json ",
    ]);
    assert_eq!(
        matches.get_one::<String>("policy").map(|s| s.trim()),
        Some("custom.json")
    );
}

#[test]
fn categories_rows_follow_lexicon_order() {
    let rows = categories::rows();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].category, "Transport");
    assert!(rows[0].keywords.contains(&"uber".to_string()));
    assert_eq!(rows[7].category, "Others");
    assert!(rows[7].keywords.is_empty());
}
