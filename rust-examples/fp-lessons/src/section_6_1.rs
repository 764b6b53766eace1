//! Section 6.1: Shared State
//!
//! Functions that mutate shared state depend on the order they are called
//! in: increment-then-double and double-then-increment leave different
//! values behind. Rust will not let two closures hold `&mut` to the same
//! value at once, so the shared version below needs `Cell<T>`.
//!
//! The pure version copies the input with struct update syntax instead.
//! Order of composition still matters (`f(g(x)) != g(f(x))`), but calling
//! the functions never changes anything outside them.

use std::cell::Cell;

use fp_common::pipe;

/// Adds one to the shared value.
pub fn x1(x: &Cell<i64>) {
    x.set(x.get().wrapping_add(1));
}

/// Doubles the shared value.
pub fn x2(x: &Cell<i64>) {
    x.set(x.get().wrapping_mul(2));
}

pub fn increment_then_double(start: i64) -> i64 {
    let x = Cell::new(start);
    x1(&x);
    x2(&x);
    x.get()
}

pub fn double_then_increment(start: i64) -> i64 {
    let y = Cell::new(start);
    x2(&y);
    x1(&y);
    y.get()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub val: i64,
    pub label: &'static str,
}

impl Counter {
    pub fn new(val: i64) -> Self {
        Self { val, label: "z" }
    }
}

pub fn inc(z: Counter) -> Counter {
    Counter { val: z.val.wrapping_add(1), ..z }
}

pub fn double(z: Counter) -> Counter {
    Counter { val: z.val.wrapping_mul(2), ..z }
}

pub fn demonstrate() {
    println!("x1 then x2 on shared state: {}", increment_then_double(2));
    println!("x2 then x1 on shared state: {}", double_then_increment(2));

    let z = Counter::new(2);
    println!("inc(double(z)).val = {}", inc(double(z)).val);

    let z2 = Counter::new(2);
    let _ = inc(z2);
    let _ = double(z2);
    let _ = inc(z2);
    println!("after unrelated calls, inc(double(z2)).val = {}", pipe!(double, inc)(z2).val);
    println!("reversed order, double(inc(z2)).val = {}", pipe!(inc, double)(z2).val);
}
