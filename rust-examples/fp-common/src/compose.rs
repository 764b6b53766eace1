//! # Function Composition
//!
//! Two ways to feed the output of one function into the next:
//!
//! - [`pipe!`](crate::pipe!) composes at compile time. Each stage may change
//!   the value's type, and the result is a plain closure.
//! - [`Pipeline`] composes at runtime. Every stage has type `T -> T`, stages
//!   are owned as boxed closures, and applying the pipeline is a fold over
//!   the stage list.
//!
//! Both read left to right: `pipe!(g, f)(x) == f(g(x))`.
//!
//! ## Example
//!
//! ```
//! use fp_common::compose::Pipeline;
//! use fp_common::pipe;
//!
//! fn g(n: i64) -> i64 { n + 1 }
//! fn f(n: i64) -> i64 { n * 2 }
//!
//! assert_eq!(pipe!(g, f)(20), 42);
//!
//! let pipeline = Pipeline::new().then(g).then(f);
//! assert_eq!(pipeline.apply(20), 42);
//! ```

use std::fmt;

use crate::fold::reduce;

/// Returns its argument unchanged.
///
/// The unit of composition: piping through `identity` changes nothing.
///
/// ```
/// use fp_common::compose::identity;
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Right-to-left composition of two functions: `compose2(f, g)(x) == f(g(x))`.
///
/// ```
/// use fp_common::compose::compose2;
///
/// let to_len = compose2(|s: String| s.len(), |n: u32| n.to_string());
/// assert_eq!(to_len(12345), 5);
/// ```
pub fn compose2<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Composes functions left to right.
///
/// `pipe!(f1, f2, f3)` is a closure computing `f3(f2(f1(x)))`. The output
/// type of each stage must match the input type of the following one.
/// `pipe!()` is [`identity`].
///
/// # Examples
///
/// ```
/// use fp_common::pipe;
///
/// fn parse(s: &str) -> i64 { s.trim().parse().unwrap_or(0) }
/// fn square(n: i64) -> i64 { n * n }
/// fn render(n: i64) -> String { format!("<{n}>") }
///
/// let run = pipe!(parse, square, render);
/// assert_eq!(run(" 7 "), "<49>");
///
/// let nothing = pipe!();
/// assert_eq!(nothing(3), 3);
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::compose::identity
    };
    ($stage:expr $(,)?) => {
        $stage
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::pipe!($($rest),+);
        move |input| rest(first(input))
    }};
}

/// A boxed `T -> T` stage owned by a [`Pipeline`].
pub type Stage<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// An ordered list of `T -> T` functions applied left to right.
///
/// The pipeline owns its stages for as long as it lives. Extending it with
/// [`then`](Pipeline::then) consumes the old pipeline and returns a new one.
/// An empty pipeline is the identity function.
pub struct Pipeline<'a, T> {
    stages: Vec<Stage<'a, T>>,
}

impl<T> fmt::Debug for Pipeline<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

impl<T> Default for Pipeline<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Pipeline<'a, T> {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage, returning the extended pipeline.
    #[must_use]
    pub fn then<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> T + 'a,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs `input` through every stage in order.
    pub fn apply(&self, input: T) -> T {
        reduce(|value, stage| stage(value), input, &self.stages)
    }

    /// Turns the pipeline into a plain closure.
    pub fn into_fn(self) -> impl Fn(T) -> T + 'a
    where
        T: 'a,
    {
        move |input| self.apply(input)
    }
}

impl<'a, T> FromIterator<Stage<'a, T>> for Pipeline<'a, T> {
    fn from_iter<I: IntoIterator<Item = Stage<'a, T>>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

/// Builds a [`Pipeline`] from already boxed stages.
///
/// ```
/// use fp_common::compose::{pipe, Stage};
///
/// let mut stages: Vec<Stage<'_, i64>> = Vec::new();
/// stages.push(Box::new(|n| n + 1));
/// stages.push(Box::new(|n| n * 2));
///
/// assert_eq!(pipe(stages).apply(20), 42);
/// ```
pub fn pipe<'a, T, I>(stages: I) -> Pipeline<'a, T>
where
    I: IntoIterator<Item = Stage<'a, T>>,
{
    stages.into_iter().collect()
}
