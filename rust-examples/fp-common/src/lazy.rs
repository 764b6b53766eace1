//! Lazy counterparts of the eager combinators in [`fold`](crate::fold).
//!
//! These accept anything iterable and return iterators, so nothing is
//! computed until the result is consumed. That makes them usable on
//! unbounded sequences as long as the consumer stops (e.g. with `take`).
//!
//! ```
//! use fp_common::lazy;
//!
//! let first_even_squares: Vec<u64> =
//!     lazy::filter(|n| n % 2 == 0, lazy::map(|n: u64| n * n, 1..)).take(3).collect();
//! assert_eq!(first_even_squares, vec![4, 16, 36]);
//! ```

/// Transforms each element as it is pulled.
pub fn map<I, U, F>(transform: F, sequence: I) -> impl Iterator<Item = U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    sequence.into_iter().map(transform)
}

/// Yields the elements `predicate` accepts, in their original order.
pub fn filter<I, P>(predicate: P, sequence: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence.into_iter().filter(predicate)
}

/// Consumes the sequence; never returns on an unbounded input.
pub fn reduce<I, A, F>(combine: F, initial: A, sequence: I) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    sequence.into_iter().fold(initial, combine)
}
