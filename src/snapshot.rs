// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Read-only loaders for ledger data handed over by the host store.

use crate::models::{SalaryConfig, Transaction, TransactionType};
use crate::utils::{parse_datetime, parse_decimal};
use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub salary: Option<SalaryConfig>,
    /// Newest first.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Snapshot {
    pub fn salary(&self) -> Result<&SalaryConfig> {
        self.salary
            .as_ref()
            .context("Snapshot has no salary configuration")
    }
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("Open snapshot {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid snapshot JSON in {}", path.display()))?;
    if let Some(cfg) = &snapshot.salary {
        cfg.validate()
            .with_context(|| format!("Invalid salary configuration in {}", path.display()))?;
    }
    for t in &snapshot.transactions {
        check_amount(t.id, t.amount)?;
    }
    info!(
        path = %path.display(),
        transactions = snapshot.transactions.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Read a CSV export with columns `id,date,type,amount,category,description`.
/// Rows are kept in file order.
pub fn load_transactions_csv(path: &Path) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path.display()))?;

    let mut out = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = line + 2;
        let id_raw = rec.get(0).context("id missing")?.trim();
        let date_raw = rec.get(1).context("date missing")?.trim();
        let type_raw = rec.get(2).context("type missing")?.trim();
        let amount_raw = rec.get(3).context("amount missing")?.trim();
        let category = rec.get(4).unwrap_or("").trim();
        let description = rec.get(5).unwrap_or("").trim().to_string();

        let id = id_raw
            .parse::<i64>()
            .with_context(|| format!("Invalid id '{}' on row {}", id_raw, row))?;
        let date = parse_datetime(date_raw)
            .with_context(|| format!("Invalid transaction date on row {}", row))?;
        let r#type = parse_type(type_raw).with_context(|| format!("Row {}", row))?;
        let amount = parse_decimal(amount_raw)
            .with_context(|| format!("Invalid amount '{}' on row {}", amount_raw, row))?;
        check_amount(id, amount)?;

        out.push(Transaction {
            id,
            amount,
            category: if category.is_empty() {
                "Others".to_string()
            } else {
                category.to_string()
            },
            description,
            r#type,
            date,
        });
    }
    info!(path = %path.display(), transactions = out.len(), "loaded CSV ledger");
    Ok(out)
}

fn parse_type(s: &str) -> Result<TransactionType> {
    if s.eq_ignore_ascii_case("expense") {
        Ok(TransactionType::Expense)
    } else if s.eq_ignore_ascii_case("income") {
        Ok(TransactionType::Income)
    } else {
        Err(anyhow!("Unknown transaction type '{}', expected EXPENSE or INCOME", s))
    }
}

fn check_amount(id: i64, amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(anyhow!(
            "Transaction {} has non-positive amount {}",
            id,
            amount
        ));
    }
    Ok(())
}
