// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use burnrate::lexicon::{Category, LEXICON, classify};
use burnrate::parse_quick_add;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn uber_ride_is_transport() {
    let p = parse_quick_add("250 for uber to office");
    assert_eq!(p.amount, dec("250"));
    assert_eq!(p.category, Category::Transport);
    assert_eq!(p.description, "Uber to office");
}

#[test]
fn swiggy_dinner_is_food() {
    let p = parse_quick_add("500 swiggy dinner");
    assert_eq!(p.amount, dec("500"));
    assert_eq!(p.category, Category::Food);
    assert_eq!(p.description, "Swiggy dinner");
}

#[test]
fn no_numbers_degrades_to_zero_and_others() {
    let p = parse_quick_add("no numbers here");
    assert_eq!(p.amount, Decimal::ZERO);
    assert_eq!(p.category, Category::Others);
    assert_eq!(p.description, "No numbers here");
    assert!(!p.is_valid());
}

#[test]
fn thousands_separators_and_fraction() {
    let p = parse_quick_add("spent 1,299.50 on amazon shoes");
    assert_eq!(p.amount, dec("1299.50"));
    assert_eq!(p.category, Category::Shopping);
    assert_eq!(p.description, "Amazon shoes");
}

#[test]
fn first_number_wins_and_all_numbers_are_stripped() {
    let p = parse_quick_add("120 metro 2 tickets 60 each");
    assert_eq!(p.amount, dec("120"));
    assert_eq!(p.category, Category::Transport);
    assert_eq!(p.description, "Metro tickets each");
}

#[test]
fn currency_words_and_symbols_are_removed() {
    let p = parse_quick_add("₹450 Rs. electricity bill rupees");
    assert_eq!(p.amount, dec("450"));
    assert_eq!(p.category, Category::Bills);
    assert_eq!(p.description, "Electricity bill");

    let q = parse_quick_add("SPENT 80 ON Coffee For team");
    assert_eq!(q.category, Category::Food);
    assert_eq!(q.description, "Coffee team");
}

#[test]
fn stop_words_only_match_whole_words() {
    let p = parse_quick_add("399 phone recharge");
    assert_eq!(p.category, Category::Bills);
    assert_eq!(p.description, "Phone recharge");
}

#[test]
fn only_ascii_digits_form_the_amount() {
    // Arabic-Indic three is not an amount
    let p = parse_quick_add("٣ coffee 200");
    assert_eq!(p.amount, dec("200"));
    assert_eq!(p.category, Category::Food);
    assert_eq!(p.description, "٣ coffee");
}

#[test]
fn empty_input_gives_empty_description() {
    let p = parse_quick_add("   ");
    assert_eq!(p.amount, Decimal::ZERO);
    assert_eq!(p.category, Category::Others);
    assert_eq!(p.description, "");

    let only_amount = parse_quick_add("75");
    assert_eq!(only_amount.amount, dec("75"));
    assert_eq!(only_amount.description, "");
    assert!(only_amount.is_valid());
}

#[test]
fn first_category_in_declaration_order_wins() {
    // "uber" (Transport) and "food" (Food) both match
    let p = parse_quick_add("300 uber eats food");
    assert_eq!(p.category, Category::Transport);
}

#[test]
fn substring_matching_is_kept() {
    // "cab" inside "cabbage" hits Transport before Groceries is checked
    assert_eq!(classify("cabbage and vegetables"), Category::Transport);
    assert_eq!(classify("BIGBASKET order"), Category::Groceries);
}

#[test]
fn others_has_no_keywords() {
    assert!(Category::Others.keywords().is_empty());
    let last = LEXICON.last().unwrap();
    assert_eq!(last.category, Category::Others);
    assert!(!last.matches("anything at all"));
}

#[test]
fn lexicon_covers_vocabulary_in_order() {
    let order: Vec<Category> = LEXICON.iter().map(|r| r.category).collect();
    assert_eq!(order, Category::ALL.to_vec());
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(
        names,
        [
            "Transport",
            "Food",
            "Shopping",
            "Entertainment",
            "Bills",
            "Health",
            "Groceries",
            "Others"
        ]
    );
}

#[test]
fn category_from_str_is_case_insensitive() {
    assert_eq!(" groceries ".parse::<Category>().unwrap(), Category::Groceries);
    assert!("Travel".parse::<Category>().is_err());
}
