//! Section 8.1: Higher-Order Functions
//!
//! A higher-order function takes a function as an argument or returns one.
//! First-order functions do neither, and it shows: the two first-order
//! word filters below repeat the same loop and differ in a single line.
//!
//! Pulling the loop out into `reduce`, and `filter` on top of it, leaves
//! only the part that differs: the predicate.

use fp_common::{filter, reduce};

pub fn censor_first_order<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut filtered = Vec::new();
    for word in words {
        if word.chars().count() != 4 {
            filtered.push(*word);
        }
    }
    filtered
}

pub fn starts_with_o_first_order<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut filtered = Vec::new();
    for word in words {
        if word.starts_with('o') {
            filtered.push(*word);
        }
    }
    filtered
}

pub fn sum(values: &[i64]) -> i64 {
    reduce(|acc, curr| acc + curr, 0, values)
}

/// Removes four-letter words.
pub fn censor<'a>(words: &[&'a str]) -> Vec<&'a str> {
    filter(|word| word.chars().count() != 4, words)
}

pub fn starts_with_o<'a>(words: &[&'a str]) -> Vec<&'a str> {
    filter(|word| word.starts_with('o'), words)
}

pub const WORDS: [&str; 4] = ["oops", "gasp", "shout", "sun"];

pub fn demonstrate() {
    println!("censor_first_order: {:?}", censor_first_order(&WORDS));
    println!("starts_with_o_first_order: {:?}", starts_with_o_first_order(&WORDS));
    println!("sum([1, 2, 3]) = {}", sum(&[1, 2, 3]));
    println!("censor: {:?}", censor(&WORDS));
    println!("starts_with_o: {:?}", starts_with_o(&WORDS));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_order_filters() {
        assert_eq!(censor_first_order(&WORDS), vec!["shout", "sun"]);
        assert_eq!(starts_with_o_first_order(&WORDS), vec!["oops"]);
    }

    #[test]
    fn test_higher_order_filters() {
        assert_eq!(censor(&WORDS), vec!["shout", "sun"]);
        assert_eq!(starts_with_o(&WORDS), vec!["oops"]);
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1, 2, 3]), 6);
        assert_eq!(sum(&[]), 0);
    }

    proptest! {
        #[test]
        fn prop_higher_order_matches_first_order(words in prop::collection::vec("[a-z]{1,6}", 0..16)) {
            let words: Vec<&str> = words.iter().map(String::as_str).collect();
            prop_assert_eq!(censor(&words), censor_first_order(&words));
            prop_assert_eq!(starts_with_o(&words), starts_with_o_first_order(&words));
        }
    }
}
