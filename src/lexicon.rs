// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fixed category vocabulary and the keyword table used to classify free text.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Transport,
    Food,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Groceries,
    Others,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Transport,
        Category::Food,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Health,
        Category::Groceries,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Food => "Food",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Health => "Health",
            Category::Groceries => "Groceries",
            Category::Others => "Others",
        }
    }

    /// Keywords that select this category. `Others` has none: it is only
    /// ever reached as the fallback.
    pub fn keywords(&self) -> &'static [&'static str] {
        LEXICON
            .iter()
            .find(|rule| rule.category == *self)
            .map(|rule| rule.keywords)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow!("Unknown category '{}'", s))
    }
}

pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl CategoryRule {
    /// Substring test against already lower-cased text.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Evaluated top to bottom; the first rule with a hit wins.
pub static LEXICON: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Transport,
        keywords: &[
            "uber", "ola", "cab", "taxi", "bus", "metro", "train", "fuel", "petrol", "diesel",
            "parking", "toll",
        ],
    },
    CategoryRule {
        category: Category::Food,
        keywords: &[
            "food",
            "lunch",
            "dinner",
            "breakfast",
            "restaurant",
            "cafe",
            "coffee",
            "tea",
            "snack",
            "zomato",
            "swiggy",
            "dominos",
            "pizza",
            "burger",
        ],
    },
    CategoryRule {
        category: Category::Shopping,
        keywords: &[
            "amazon",
            "flipkart",
            "myntra",
            "clothes",
            "shoes",
            "electronics",
            "shopping",
            "mall",
            "market",
            "store",
        ],
    },
    CategoryRule {
        category: Category::Entertainment,
        keywords: &[
            "netflix", "prime", "hotstar", "movie", "theater", "game", "spotify", "youtube",
        ],
    },
    CategoryRule {
        category: Category::Bills,
        keywords: &[
            "electricity",
            "water",
            "gas",
            "internet",
            "wifi",
            "phone",
            "mobile",
            "recharge",
            "bill",
            "rent",
            "emi",
        ],
    },
    CategoryRule {
        category: Category::Health,
        keywords: &[
            "medicine", "doctor", "hospital", "pharmacy", "medical", "gym", "fitness",
        ],
    },
    CategoryRule {
        category: Category::Groceries,
        keywords: &[
            "grocery",
            "vegetables",
            "fruits",
            "milk",
            "bread",
            "bigbasket",
            "blinkit",
            "zepto",
            "instamart",
        ],
    },
    CategoryRule {
        category: Category::Others,
        keywords: &[],
    },
];

/// Classify free text. Matching is case-insensitive and substring based.
pub fn classify(text: &str) -> Category {
    let lowered = text.to_lowercase();
    LEXICON
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(Category::Others)
}
