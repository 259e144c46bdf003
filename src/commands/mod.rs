// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod gauge;
pub mod insights;
pub mod parse;

use crate::utils::parse_date;
use anyhow::Result;
use chrono::NaiveDate;

/// `--today` when given, otherwise the local calendar date.
pub fn resolve_today(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("today") {
        Some(raw) => parse_date(raw.trim()),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
