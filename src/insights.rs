// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Spending analytics recomputed from the full history on every call.

use crate::config::Policy;
use crate::models::Transaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlackHole {
    pub total: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionCandidate {
    pub amount: Decimal,
    pub count: usize,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
    pub percent: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendSummary {
    /// Expenses dated on the given day.
    pub today: Decimal,
    /// All expenses in the history.
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub black_hole: BlackHole,
    pub subscriptions: Vec<SubscriptionCandidate>,
    pub category_breakdown: Vec<CategoryTotal>,
    pub total_expenses: Decimal,
}

pub fn compute_insights(transactions: &[Transaction]) -> Insights {
    compute_insights_with_policy(transactions, &Policy::default())
}

pub fn compute_insights_with_policy(transactions: &[Transaction], policy: &Policy) -> Insights {
    let insights = Insights {
        black_hole: black_hole(transactions, policy.small_spend_threshold),
        subscriptions: subscriptions(transactions, policy.subscription_min_count),
        category_breakdown: category_breakdown(transactions, policy.top_categories),
        total_expenses: total_expenses(transactions),
    };
    debug!(
        transactions = transactions.len(),
        subscriptions = insights.subscriptions.len(),
        categories = insights.category_breakdown.len(),
        "computed insights"
    );
    insights
}

fn expenses(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    transactions.iter().filter(|t| t.is_expense())
}

pub fn total_expenses(transactions: &[Transaction]) -> Decimal {
    expenses(transactions).map(|t| t.amount).sum()
}

/// Many small expenses strictly below `threshold`.
pub fn black_hole(transactions: &[Transaction], threshold: Decimal) -> BlackHole {
    expenses(transactions)
        .filter(|t| t.amount < threshold)
        .fold(BlackHole::default(), |mut acc, t| {
            acc.total += t.amount;
            acc.count += 1;
            acc
        })
}

/// Expenses sharing an exact amount, at least `min_count` times. The label
/// comes from the first member in history order (newest first). Results are
/// ordered by where each amount first appears in the history, not by amount,
/// so the most recently charged subscription is listed first.
pub fn subscriptions(transactions: &[Transaction], min_count: usize) -> Vec<SubscriptionCandidate> {
    let mut index: HashMap<Decimal, usize> = HashMap::new();
    let mut groups: Vec<SubscriptionCandidate> = Vec::new();
    for t in expenses(transactions) {
        match index.entry(t.amount) {
            Entry::Occupied(entry) => groups[*entry.get()].count += 1,
            Entry::Vacant(entry) => {
                entry.insert(groups.len());
                groups.push(SubscriptionCandidate {
                    amount: t.amount,
                    count: 1,
                    description: t.description.clone(),
                    category: t.category.clone(),
                });
            }
        }
    }
    groups.retain(|g| g.count >= min_count);
    groups
}

/// Top `top_n` expense categories by total. Percentages are relative to all
/// expenses, not only the categories returned.
pub fn category_breakdown(transactions: &[Transaction], top_n: usize) -> Vec<CategoryTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, Decimal)> = Vec::new();
    for t in expenses(transactions) {
        match index.entry(t.category.as_str()) {
            Entry::Occupied(entry) => totals[*entry.get()].1 += t.amount,
            Entry::Vacant(entry) => {
                entry.insert(totals.len());
                totals.push((t.category.as_str(), t.amount));
            }
        }
    }
    let grand_total: Decimal = totals.iter().map(|(_, amt)| *amt).sum();

    // Stable sort keeps first-appearance order between equal totals
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
        .into_iter()
        .take(top_n)
        .map(|(category, amount)| CategoryTotal {
            category: category.to_string(),
            amount,
            percent: percent_of(amount, grand_total),
        })
        .collect()
}

fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|v| v.checked_div(whole))
        .unwrap_or(Decimal::ZERO)
}

pub fn spend_summary(transactions: &[Transaction], today: NaiveDate) -> SpendSummary {
    expenses(transactions).fold(SpendSummary::default(), |mut acc, t| {
        if t.date.date() == today {
            acc.today += t.amount;
        }
        acc.total += t.amount;
        acc
    })
}
