// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::lexicon;
use crate::models::ParsedExpense;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

// ASCII digits with optional thousands commas and an optional fraction.
// Other scripts' digits are left in the text; `Decimal` cannot parse them.
static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9][0-9,]*(?:\.[0-9]+)?").expect("amount pattern compiles"));

/// Filler words removed from the description. Matched as whole words so
/// "phone" keeps its "on", unlike the substring keyword lexicon.
static STOP_WORDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:for|spent|on|rupees|inr|rs)\b\.?|[₹$]").expect("stop word pattern compiles")
});

static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Turn a quick-add line such as `"250 for uber to office"` into a candidate
/// expense. Never fails: a missing amount comes back as zero.
pub fn parse_quick_add(input: &str) -> ParsedExpense {
    let parsed = ParsedExpense {
        amount: extract_amount(input),
        category: lexicon::classify(input),
        description: extract_description(input),
    };
    debug!(input, ?parsed, "parsed quick-add entry");
    parsed
}

fn extract_amount(input: &str) -> Decimal {
    AMOUNT_RE
        .find(input)
        .and_then(|m| m.as_str().replace(',', "").parse::<Decimal>().ok())
        .unwrap_or(Decimal::ZERO)
}

fn extract_description(input: &str) -> String {
    let without_numbers = AMOUNT_RE.replace_all(input, " ");
    let without_stop_words = STOP_WORDS_RE.replace_all(&without_numbers, " ");
    let collapsed = SPACES_RE.replace_all(without_stop_words.trim(), " ");
    capitalize_first(&collapsed)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
