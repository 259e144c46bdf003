// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::lexicon::LEXICON;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub keywords: Vec<String>,
}

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = rows();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let table_rows = data
            .iter()
            .map(|r| {
                let kw = if r.keywords.is_empty() {
                    "(fallback)".to_string()
                } else {
                    r.keywords.join(", ")
                };
                vec![r.category.clone(), kw]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Keywords"], table_rows));
    }
    Ok(())
}

/// Lexicon rows in evaluation order.
pub fn rows() -> Vec<CategoryRow> {
    LEXICON
        .iter()
        .map(|rule| CategoryRow {
            category: rule.category.to_string(),
            keywords: rule.keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect()
}
