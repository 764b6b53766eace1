//! Section 6.3: Functors
//!
//! A functor is a container you can map over. `Vec` is the familiar one,
//! but `Option`, `Result` and the persistent `im::Vector` are mappable
//! too: see [`fp_common::Functor`].
//!
//! The imperative and declarative versions of "double every number" below
//! compute the same thing. The declarative one states *what* happens to
//! each element and leaves the loop to the container.

use fp_common::{Functor, map};
use im::Vector;

pub fn double(n: i64) -> i64 {
    n.wrapping_mul(2)
}

pub fn double_map(numbers: &[i64]) -> Vec<i64> {
    map(|n| double(*n), numbers)
}

/// Something to shoot at in a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub points: i64,
}

impl Target {
    pub fn new(name: impl Into<String>, points: i64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

pub fn double_points(target: &Target) -> i64 {
    target.points.wrapping_mul(2)
}

/// Same mapping, different function: only the transform changed.
pub fn double_map_points(targets: &[Target]) -> Vec<i64> {
    map(double_points, targets)
}

pub fn double_map_imperative(numbers: &[i64]) -> Vec<i64> {
    let mut doubled = Vec::with_capacity(numbers.len());
    for n in numbers {
        doubled.push(n.wrapping_mul(2));
    }
    doubled
}

pub fn double_map_declarative(numbers: Vec<i64>) -> Vec<i64> {
    numbers.fmap(double)
}

/// Doubles into a new vector; `numbers` is shared, never changed.
pub fn double_persistent(numbers: &Vector<i64>) -> Vector<i64> {
    numbers.clone().fmap(double)
}

pub fn double_if_present(n: Option<i64>) -> Option<i64> {
    n.fmap(double)
}

pub fn targets() -> Vec<Target> {
    vec![
        Target::new("ball", 3),
        Target::new("coin", 4),
        Target::new("candy", 5),
    ]
}

pub fn demonstrate() {
    println!("double_map([2, 3, 4]) = {:?}", double_map(&[2, 3, 4]));
    println!("double_map_points(targets) = {:?}", double_map_points(&targets()));
    println!("imperative: {:?}", double_map_imperative(&[4, 5, 6]));
    println!("declarative: {:?}", double_map_declarative(vec![4, 5, 6]));
    println!(
        "im::Vector: {:?}",
        double_persistent(&im::vector![4, 5, 6])
    );
    println!(
        "Option is a functor too: {:?} {:?}",
        double_if_present(Some(21)),
        double_if_present(None)
    );
}
