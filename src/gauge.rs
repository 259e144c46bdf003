// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Payday burn-rate gauge.
//!
//! The payday cycle is modelled as rolling over the current month: its length
//! is always the number of days in `today`'s month, so no lookup of the next
//! month's length is needed when the cycle wraps.

use crate::config::Policy;
use crate::utils::days_in_month;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Safe,
    Warning,
    Danger,
}

impl Zone {
    /// First match wins: Danger, then Warning within `margin` points, then Safe.
    /// A margin too large to add saturates, so everything short of Danger
    /// is a Warning.
    pub fn classify(money_left_percent: Decimal, days_left_percent: Decimal, margin: Decimal) -> Zone {
        let warning_line = days_left_percent
            .checked_add(margin)
            .unwrap_or(Decimal::MAX);
        if money_left_percent < days_left_percent {
            Zone::Danger
        } else if money_left_percent < warning_line {
            Zone::Warning
        } else {
            Zone::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Safe => "safe",
            Zone::Warning => "warning",
            Zone::Danger => "danger",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeResult {
    pub days_until_payday: u32,
    pub days_elapsed: u32,
    pub days_left_percent: Decimal,
    /// Unclamped; may be negative or above 100.
    pub money_left_percent: Decimal,
    pub zone: Zone,
    pub daily_burn_rate: Decimal,
}

impl GaugeResult {
    /// Bar width for rendering, clamped to [0, 100].
    pub fn money_bar_percent(&self) -> Decimal {
        self.money_left_percent.clamp(Decimal::ZERO, HUNDRED)
    }
}

pub fn compute_gauge(
    salary_amount: Decimal,
    current_balance: Decimal,
    pay_day: u32,
    today: NaiveDate,
) -> GaugeResult {
    compute_gauge_with_policy(
        salary_amount,
        current_balance,
        pay_day,
        today,
        &Policy::default(),
    )
}

pub fn compute_gauge_with_policy(
    salary_amount: Decimal,
    current_balance: Decimal,
    pay_day: u32,
    today: NaiveDate,
    policy: &Policy,
) -> GaugeResult {
    let month_len = days_in_month(today);
    let day = today.day();

    if !(1..=31).contains(&pay_day) {
        warn!(pay_day, "pay day out of range, clamping");
    }
    let payday = pay_day.clamp(1, month_len);

    let days_until_payday = if day <= payday {
        payday - day
    } else {
        (month_len - day) + payday
    };
    let days_elapsed = if day > payday {
        day - payday
    } else {
        day + (month_len - payday)
    };

    let days_left_percent =
        Decimal::from(days_until_payday) * HUNDRED / Decimal::from(month_len);

    let money_left_percent = if salary_amount > Decimal::ZERO {
        current_balance
            .checked_mul(HUNDRED)
            .and_then(|v| v.checked_div(salary_amount))
            .unwrap_or(Decimal::ZERO)
    } else {
        if salary_amount < Decimal::ZERO {
            warn!(%salary_amount, "negative salary treated as zero");
        }
        Decimal::ZERO
    };

    let zone = Zone::classify(money_left_percent, days_left_percent, policy.warning_margin);
    let daily_burn_rate = burn_rate(current_balance, days_until_payday);

    let result = GaugeResult {
        days_until_payday,
        days_elapsed,
        days_left_percent,
        money_left_percent,
        zone,
        daily_burn_rate,
    };
    debug!(?result, %today, "computed gauge");
    result
}

/// Balance per remaining day, rounded half up. Zero on payday itself and on
/// overflow.
fn burn_rate(balance: Decimal, days_until_payday: u32) -> Decimal {
    if days_until_payday == 0 {
        return Decimal::ZERO;
    }
    balance
        .checked_div(Decimal::from(days_until_payday))
        .and_then(|per_day| per_day.checked_add(Decimal::new(5, 1)))
        .map(|v| v.floor())
        .unwrap_or(Decimal::ZERO)
}
