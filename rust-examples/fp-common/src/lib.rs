//! # FP Common
//!
//! A small library of higher-order functions shared by the lessons.
//!
//! ## Modules
//!
//! - [`fold`]: the reducer engine (`reduce`) and `map`/`filter` built on it
//! - [`compose`]: `pipe!`, [`Pipeline`] and `identity`
//! - [`trace`]: a transparent tap that reports values to an [`Observer`]
//! - [`curry`]: curried comparators (`gte`, ...) and partial application
//! - [`functor`]: the [`Functor`] trait for mappable containers
//! - [`record`]: persistent records and `merge`
//! - [`lazy`]: iterator-returning variants of `map`/`filter`
//!
//! ## Design Principles
//!
//! 1. **Pure**: functions return new values and never mutate their inputs
//! 2. **Typed sequences**: slices of a known element type, no runtime checks
//! 3. **One engine**: everything that walks a sequence is a fold
//! 4. **Observable, not effectful**: the only side channel is `trace`

pub mod compose;
pub mod curry;
pub mod error;
pub mod fold;
pub mod functor;
pub mod lazy;
pub mod record;
pub mod trace;

// Re-export main items for convenience
pub use compose::{Pipeline, Stage, compose2, identity, pipe};
pub use curry::{curry, eq_to, gt, gte, lt, lte, partial};
pub use error::{FpError, Result};
pub use fold::{filter, flat_map, map, reduce, reduce_right, try_reduce};
pub use functor::Functor;
pub use record::{Record, Value, merge, merge_all};
pub use trace::{ConsoleObserver, LogObserver, Observer, Recorder, trace, trace_with};
