//! Curried predicate builders and partial application.
//!
//! A curried function takes its arguments one at a time. Supplying only the
//! first argument gives back a specialised function waiting for the rest,
//! which is exactly the shape [`filter`](crate::fold::filter) wants.
//!
//! ```
//! use fp_common::curry::gte;
//! use fp_common::fold::filter;
//!
//! let gte4 = gte(4);
//! assert_eq!(filter(&gte4, &[2, 4, 6]), vec![4, 6]);
//! assert!(!gte4(&3));
//! ```

/// `gte(cutoff)(n)` is `n >= cutoff`.
pub fn gte<T: PartialOrd>(cutoff: T) -> impl Fn(&T) -> bool {
    move |n| *n >= cutoff
}

/// `gt(cutoff)(n)` is `n > cutoff`.
pub fn gt<T: PartialOrd>(cutoff: T) -> impl Fn(&T) -> bool {
    move |n| *n > cutoff
}

/// `lte(cutoff)(n)` is `n <= cutoff`.
pub fn lte<T: PartialOrd>(cutoff: T) -> impl Fn(&T) -> bool {
    move |n| *n <= cutoff
}

/// `lt(cutoff)(n)` is `n < cutoff`.
pub fn lt<T: PartialOrd>(cutoff: T) -> impl Fn(&T) -> bool {
    move |n| *n < cutoff
}

/// `eq_to(expected)(n)` is `n == expected`.
pub fn eq_to<T: PartialEq>(expected: T) -> impl Fn(&T) -> bool {
    move |n| *n == expected
}

/// Turns a two-argument function into a chain of one-argument functions.
///
/// The first argument is cloned into every function produced for it, so a
/// partially applied result can be called any number of times.
///
/// ```
/// use fp_common::curry::curry;
///
/// let add = curry(|a: i32, b: i32| a + b);
/// let add10 = add(10);
/// assert_eq!(add10(5), 15);
/// assert_eq!(add(1)(2), 3);
/// ```
pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + Clone + 'static,
{
    move |a: A| {
        let f = f.clone();
        let applied: Box<dyn Fn(B) -> C> = Box::new(move |b: B| f(a.clone(), b));
        applied
    }
}

/// Fixes the first argument of a two-argument function.
///
/// ```
/// use fp_common::curry::partial;
///
/// let starts_with_o = partial(|prefix: char, word: &str| word.starts_with(prefix), 'o');
/// assert!(starts_with_o("oops"));
/// assert!(!starts_with_o("gasp"));
/// ```
pub fn partial<A, B, C, F>(f: F, a: A) -> impl Fn(B) -> C
where
    A: Clone,
    F: Fn(A, B) -> C,
{
    move |b| f(a.clone(), b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::filter;

    #[test]
    fn test_gte_with_filter() {
        assert_eq!(filter(gte(4), &[2, 4, 6]), vec![4, 6]);
    }

    #[test]
    fn test_comparators() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(filter(gt(3), &values), vec![4, 5]);
        assert_eq!(filter(lte(2), &values), vec![1, 2]);
        assert_eq!(filter(lt(1), &values), Vec::<i32>::new());
        assert_eq!(filter(eq_to(3), &values), vec![3]);
    }

    #[test]
    fn test_gte_on_non_copy_values() {
        let words = ["apple".to_string(), "melon".to_string(), "kiwi".to_string()];
        assert_eq!(
            filter(gte("kiwi".to_string()), &words),
            vec!["melon".to_string(), "kiwi".to_string()]
        );
    }

    #[test]
    fn test_curry_reuses_partial_application() {
        let scale = curry(|factor: i64, n: i64| factor * n);
        let triple = scale(3);
        assert_eq!(triple(2), 6);
        assert_eq!(triple(7), 21);
        assert_eq!(scale(0)(9), 0);
    }

    #[test]
    fn test_curry_with_owned_first_argument() {
        let greet = curry(|greeting: String, name: &'static str| format!("{greeting}, {name}"));
        let hello = greet("Hello".to_string());
        assert_eq!(hello("world"), "Hello, world");
        assert_eq!(hello("again"), "Hello, again");
    }

    #[test]
    fn test_partial() {
        let add = |a: i32, b: i32| a + b;
        let inc = partial(add, 1);
        assert_eq!(inc(41), 42);
    }
}
