//! # Reducer Engine
//!
//! Everything in this module is built on one operation: [`reduce`], which
//! walks a slice left to right and threads an accumulator through a
//! caller-supplied combining function. The iteration is the shared part;
//! the combining function is the part that differs.
//!
//! [`map`], [`filter`] and [`flat_map`] are expressed as folds, so they
//! inherit the same guarantees:
//!
//! - Elements are visited strictly in order, exactly once.
//! - The input slice is only borrowed, never mutated.
//! - The result is a freshly allocated `Vec`.
//!
//! ## Example
//!
//! ```
//! use fp_common::fold::{filter, map, reduce};
//!
//! let numbers = vec![1, 2, 3];
//!
//! assert_eq!(reduce(|acc, n| acc + n, 0, &numbers), 6);
//! assert_eq!(map(|n| n * 2, &numbers), vec![2, 4, 6]);
//! assert_eq!(filter(|n| n % 2 == 1, &numbers), vec![1, 3]);
//!
//! // The input is untouched.
//! assert_eq!(numbers, vec![1, 2, 3]);
//! ```

/// Folds a slice into a single value, left to right.
///
/// `combine` receives the current accumulator and the next element and
/// returns the next accumulator. For an empty slice `initial` is returned
/// unchanged and `combine` is never called.
///
/// # Example
/// ```
/// use fp_common::fold::reduce;
///
/// let sum = reduce(|acc, curr| acc + curr, 0, &[1, 2, 3]);
/// assert_eq!(sum, 6);
///
/// let empty: [i32; 0] = [];
/// assert_eq!(reduce(|acc, curr| acc + curr, 10, &empty), 10);
/// ```
pub fn reduce<T, A, F>(combine: F, initial: A, sequence: &[T]) -> A
where
    F: FnMut(A, &T) -> A,
{
    sequence.iter().fold(initial, combine)
}

/// Fallible left fold.
///
/// Stops at the first `Err` returned by `combine`; the remaining elements
/// are not visited.
///
/// # Example
/// ```
/// use fp_common::fold::try_reduce;
///
/// let checked_sum = |values: &[u8]| {
///     try_reduce(|acc: u8, n| acc.checked_add(*n).ok_or("overflow"), 0, values)
/// };
///
/// assert_eq!(checked_sum(&[1, 2, 3]), Ok(6));
/// assert_eq!(checked_sum(&[200, 100]), Err("overflow"));
/// ```
pub fn try_reduce<T, A, E, F>(combine: F, initial: A, sequence: &[T]) -> Result<A, E>
where
    F: FnMut(A, &T) -> Result<A, E>,
{
    sequence.iter().try_fold(initial, combine)
}

/// Right fold: visits elements from last to first.
///
/// # Example
/// ```
/// use fp_common::fold::reduce_right;
///
/// let nested = reduce_right(|n, acc| format!("({n} {acc})"), "nil".to_string(), &[1, 2, 3]);
/// assert_eq!(nested, "(1 (2 (3 nil)))");
/// ```
pub fn reduce_right<T, A, F>(mut combine: F, initial: A, sequence: &[T]) -> A
where
    F: FnMut(&T, A) -> A,
{
    sequence.iter().rfold(initial, |acc, element| combine(element, acc))
}

/// Applies `transform` to every element, producing a new `Vec`.
///
/// The result has the same length and order as the input:
/// `map(f, s)[i] == f(&s[i])`.
///
/// The accumulator is moved through the fold, so extending it in a step
/// can never be observed through an earlier accumulator value.
///
/// # Example
/// ```
/// use fp_common::fold::map;
///
/// let words = ["ball", "coin"];
/// assert_eq!(map(|w| w.len(), &words), vec![4, 4]);
/// ```
pub fn map<T, U, F>(mut transform: F, sequence: &[T]) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    reduce(
        |mut acc: Vec<U>, element| {
            acc.push(transform(element));
            acc
        },
        Vec::with_capacity(sequence.len()),
        sequence,
    )
}

/// Keeps the elements for which `predicate` holds, in their original order.
///
/// # Example
/// ```
/// use fp_common::fold::filter;
///
/// let words = ["oops", "gasp", "shout", "sun"];
/// assert_eq!(filter(|w| w.len() != 4, &words), vec!["shout", "sun"]);
/// ```
pub fn filter<T, P>(mut predicate: P, sequence: &[T]) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    reduce(
        |mut acc: Vec<T>, element| {
            if predicate(element) {
                acc.push(element.clone());
            }
            acc
        },
        Vec::new(),
        sequence,
    )
}

/// Maps every element to a collection and concatenates the results.
///
/// # Example
/// ```
/// use fp_common::fold::flat_map;
///
/// let result = flat_map(|n| vec![*n, *n * 10], &[1, 2, 3]);
/// assert_eq!(result, vec![1, 10, 2, 20, 3, 30]);
/// ```
pub fn flat_map<T, U, I, F>(mut transform: F, sequence: &[T]) -> Vec<U>
where
    I: IntoIterator<Item = U>,
    F: FnMut(&T) -> I,
{
    reduce(
        |mut acc: Vec<U>, element| {
            acc.extend(transform(element));
            acc
        },
        Vec::new(),
        sequence,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reduce_sums() {
        assert_eq!(reduce(|acc, x| acc + x, 0, &[1, 2, 3]), 6);
    }

    #[test]
    fn test_reduce_empty_returns_initial() {
        let empty: &[i32] = &[];
        let mut calls = 0;
        let result = reduce(
            |acc, x| {
                calls += 1;
                acc + x
            },
            42,
            empty,
        );
        assert_eq!(result, 42);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_reduce_visits_left_to_right_once_each() {
        let mut calls = 0;
        let visited = reduce(
            |mut acc: Vec<char>, c| {
                calls += 1;
                acc.push(*c);
                acc
            },
            Vec::new(),
            &['c', 'a', 'b'],
        );
        assert_eq!(visited, vec!['c', 'a', 'b']);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_reduce_accumulator_type_differs_from_element() {
        let joined = reduce(
            |acc: String, word: &&str| {
                if acc.is_empty() {
                    (*word).to_string()
                } else {
                    format!("{acc} {word}")
                }
            },
            String::new(),
            &["nutty", "caramel", "swirl"],
        );
        assert_eq!(joined, "nutty caramel swirl");
    }

    #[test]
    fn test_try_reduce_stops_at_first_error() {
        let mut visited = Vec::new();
        let result: Result<i32, String> = try_reduce(
            |acc, x: &i32| {
                visited.push(*x);
                if *x < 0 {
                    Err(format!("negative: {x}"))
                } else {
                    Ok(acc + x)
                }
            },
            0,
            &[1, 2, -3, 4],
        );
        assert_eq!(result, Err("negative: -3".to_string()));
        assert_eq!(visited, vec![1, 2, -3]);
    }

    #[test]
    fn test_reduce_right_order() {
        let digits = reduce_right(|d, acc: String| format!("{acc}{d}"), String::new(), &[1, 2, 3]);
        assert_eq!(digits, "321");
    }

    #[test]
    fn test_filter_threshold() {
        assert_eq!(filter(|n| *n >= 4, &[2, 4, 6]), vec![4, 6]);
    }

    #[test]
    fn test_filter_keeps_input_intact() {
        let words = vec!["oops".to_string(), "gasp".to_string(), "shout".to_string()];
        let before = words.clone();
        let kept = filter(|w| w.starts_with('o'), &words);
        assert_eq!(kept, vec!["oops".to_string()]);
        assert_eq!(words, before);
    }

    #[test]
    fn test_map_changes_type() {
        let lengths = map(|w: &&str| w.len(), &["sun", "shout"]);
        assert_eq!(lengths, vec![3, 5]);
    }

    #[test]
    fn test_flat_map_empty_results() {
        let evens_twice = flat_map(
            |n: &i32| if n % 2 == 0 { vec![*n, *n] } else { Vec::new() },
            &[1, 2, 3, 4],
        );
        assert_eq!(evens_twice, vec![2, 2, 4, 4]);
    }

    proptest! {
        #[test]
        fn prop_map_preserves_length_and_positions(values in prop::collection::vec(any::<i32>(), 0..64)) {
            let doubled = map(|n| n.wrapping_mul(2), &values);
            prop_assert_eq!(doubled.len(), values.len());
            for (i, value) in values.iter().enumerate() {
                prop_assert_eq!(doubled[i], value.wrapping_mul(2));
            }
        }

        #[test]
        fn prop_filter_is_ordered_subsequence(values in prop::collection::vec(-100i32..100, 0..64), cutoff in -100i32..100) {
            let kept = filter(|n| *n >= cutoff, &values);
            let expected: Vec<i32> = values.iter().copied().filter(|n| *n >= cutoff).collect();
            prop_assert_eq!(&kept, &expected);
            prop_assert!(kept.iter().all(|n| *n >= cutoff));
        }

        #[test]
        fn prop_calls_are_repeatable_and_pure(values in prop::collection::vec(any::<i64>(), 0..64)) {
            let before = values.clone();
            let first = (
                reduce(|acc: i64, n| acc.wrapping_add(*n), 0, &values),
                map(|n| n.wrapping_sub(1), &values),
                filter(|n| n % 3 == 0, &values),
            );
            let second = (
                reduce(|acc: i64, n| acc.wrapping_add(*n), 0, &values),
                map(|n| n.wrapping_sub(1), &values),
                filter(|n| n % 3 == 0, &values),
            );
            prop_assert_eq!(first, second);
            prop_assert_eq!(values, before);
        }
    }
}
