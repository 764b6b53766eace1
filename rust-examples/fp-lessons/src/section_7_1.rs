//! Section 7.1: Functional Building Blocks
//!
//! The small language features functional code leans on:
//!
//! - building records from variables and merging them
//! - destructuring with patterns
//! - defaults with `Option`
//! - "rest" and "spread" with slice patterns
//! - currying
//! - `map` and `filter`

use fp_common::{Record, filter, gte, map, merge, record};

/// `({a: "a"}, {b: "b"})`, each built from a variable of the same name.
pub fn shorthand_records() -> (Record, Record) {
    let a = "a";
    let b = "b";
    (record! { "a" => a }, record! { "b" => b })
}

/// Everything from `source` copied onto an empty record.
pub fn assign(source: &Record) -> Record {
    merge(&Record::new(), source)
}

/// The first two elements, destructured.
pub fn first_two<T: Clone>(items: &[T]) -> Option<(T, T)> {
    match items {
        [t, u, ..] => Some((t.clone(), u.clone())),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blep {
    pub blop: String,
}

pub fn blop_of(Blep { blop }: &Blep) -> &str {
    blop
}

/// A missing argument defaults to zero.
pub fn or_zero(n: Option<i64>) -> i64 {
    n.unwrap_or_default()
}

/// Drops the head and keeps the rest.
pub fn a_tail<T: Clone>(items: &[T]) -> Vec<T> {
    match items {
        [_head, tail @ ..] => tail.to_vec(),
        [] => Vec::new(),
    }
}

/// Moves the head to the end: `[1, 2, 3]` becomes `[2, 3, 1]`.
pub fn shift_to_last<T: Clone>(items: &[T]) -> Vec<T> {
    match items {
        [head, tail @ ..] => tail.iter().chain(std::iter::once(head)).cloned().collect(),
        [] => Vec::new(),
    }
}

/// `gte` with the cutoff already supplied.
pub fn gte4() -> impl Fn(&i64) -> bool {
    gte(4)
}

pub fn doubled(values: &[i64]) -> Vec<i64> {
    map(|x| x.wrapping_mul(2), values)
}

pub fn at_least_four(values: &[i64]) -> Vec<i64> {
    filter(gte4(), values)
}

pub fn demonstrate() {
    let (o_a, o_b) = shorthand_records();
    println!("merge(o_a, o_b): {}", merge(&o_a, &o_b));
    println!("assign onto empty: {}", assign(&o_b));

    println!("first two of [\"a\", \"b\"]: {:?}", first_two(&["a", "b"]));
    println!(
        "blop: {}",
        blop_of(&Blep {
            blop: "blop".to_string()
        })
    );
    println!("or_zero(None) = {}, or_zero(Some(7)) = {}", or_zero(None), or_zero(Some(7)));

    println!("a_tail([1, 2, 3]) = {:?}", a_tail(&[1, 2, 3]));
    println!("shift_to_last([1, 2, 3]) = {:?}", shift_to_last(&[1, 2, 3]));

    println!("doubled([1, 2, 3]) = {:?}", doubled(&[1, 2, 3]));
    println!("[2, 4, 6] filtered by gte(4) = {:?}", at_least_four(&[2, 4, 6]));
}
