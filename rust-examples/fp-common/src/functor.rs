//! # Functors
//!
//! A functor is a container that can be mapped over: applying a function to
//! every value inside it yields a new container of the same shape.
//!
//! Implementations must satisfy two laws:
//!
//! - **Identity**: `fa.fmap(identity) == fa`
//! - **Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! The output type `B` is a trait parameter so that containers with bounds
//! on their contents, such as `im::Vector<B: Clone>`, can state them.
//!
//! ```
//! use fp_common::functor::Functor;
//!
//! assert_eq!(vec![2, 3, 4].fmap(|n| n * 2), vec![4, 6, 8]);
//! assert_eq!(Some(21).fmap(|n| n * 2), Some(42));
//! assert_eq!(None::<i32>.fmap(|n| n * 2), None);
//! assert_eq!(im::vector![1, 2].fmap(|n| n + 1), im::vector![2, 3]);
//! ```

use im::Vector;

/// A container whose contents can be transformed into `B`s without
/// changing its shape.
pub trait Functor<B> {
    /// The contained value type.
    type Item;

    /// The same container holding `B` instead of `Self::Item`.
    type Mapped;

    /// Applies `f` to every contained value, in order.
    fn fmap<F>(self, f: F) -> Self::Mapped
    where
        F: FnMut(Self::Item) -> B;
}

impl<T, B> Functor<B> for Vec<T> {
    type Item = T;
    type Mapped = Vec<B>;

    fn fmap<F>(self, f: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(f).collect()
    }
}

impl<T, B> Functor<B> for Option<T> {
    type Item = T;
    type Mapped = Option<B>;

    fn fmap<F>(self, f: F) -> Option<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(f)
    }
}

/// Maps the `Ok` value; an `Err` passes through untouched.
impl<T, E, B> Functor<B> for Result<T, E> {
    type Item = T;
    type Mapped = Result<B, E>;

    fn fmap<F>(self, f: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(f)
    }
}

/// Builds a new persistent vector. Clones of the input are unaffected.
impl<T: Clone, B: Clone> Functor<B> for Vector<T> {
    type Item = T;
    type Mapped = Vector<B>;

    fn fmap<F>(self, f: F) -> Vector<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(f).collect()
    }
}

impl<T, B, const N: usize> Functor<B> for [T; N] {
    type Item = T;
    type Mapped = [B; N];

    fn fmap<F>(self, f: F) -> [B; N]
    where
        F: FnMut(T) -> B,
    {
        self.map(f)
    }
}
