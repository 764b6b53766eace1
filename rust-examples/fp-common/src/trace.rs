//! # Tap Functions
//!
//! [`trace`] builds a function that reports a labelled value and hands the
//! value back unchanged. Dropping one between two stages of a pipe shows
//! the intermediate value without changing the final result.
//!
//! Where the report goes is decided by an [`Observer`]:
//!
//! | Observer            | Destination                          |
//! |---------------------|--------------------------------------|
//! | [`LogObserver`]     | a `tracing` event (the default)      |
//! | [`ConsoleObserver`] | standard output, `label: value`      |
//! | [`Recorder`]        | an in-memory list of `label: value`  |
//!
//! ## Example
//!
//! ```
//! use fp_common::pipe;
//! use fp_common::trace::{trace_with, Recorder};
//!
//! fn g(n: i64) -> i64 { n + 1 }
//! fn f(n: i64) -> i64 { n * 2 }
//!
//! let recorder = Recorder::new();
//! let do_stuff = pipe!(g, trace_with(&recorder, "after g"), f, trace_with(&recorder, "after f"));
//!
//! assert_eq!(do_stuff(10), 22);
//! assert_eq!(recorder.lines(), vec!["after g: 11", "after f: 22"]);
//! ```

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Receives one event per traced value.
pub trait Observer {
    fn observe(&self, label: &str, value: &dyn fmt::Debug);
}

impl<O: Observer + ?Sized> Observer for &O {
    fn observe(&self, label: &str, value: &dyn fmt::Debug) {
        (**self).observe(label, value);
    }
}

/// Emits an `info` event with target `fp_common::trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn observe(&self, label: &str, value: &dyn fmt::Debug) {
        tracing::info!(target: "fp_common::trace", label, value = ?value, "trace");
    }
}

/// Prints `label: value` to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl Observer for ConsoleObserver {
    fn observe(&self, label: &str, value: &dyn fmt::Debug) {
        println!("{label}: {value:?}");
    }
}

/// Collects `label: value` lines in memory, in the order they were observed.
#[derive(Debug, Default)]
pub struct Recorder {
    lines: Mutex<Vec<String>>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything observed so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Observer for Recorder {
    fn observe(&self, label: &str, value: &dyn fmt::Debug) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(format!("{label}: {value:?}"));
    }
}

/// Returns a function that logs `label` and its argument through `tracing`,
/// then returns the argument unchanged.
///
/// ```
/// use fp_common::trace::trace;
///
/// let tap = trace("after g");
/// assert_eq!(tap(21), 21);
/// ```
pub fn trace<T>(label: impl Into<String>) -> impl Fn(T) -> T
where
    T: fmt::Debug,
{
    trace_with(LogObserver, label)
}

/// Like [`trace`], but reports to the given observer.
pub fn trace_with<T, O>(observer: O, label: impl Into<String>) -> impl Fn(T) -> T
where
    T: fmt::Debug,
    O: Observer,
{
    let label = label.into();
    move |value| {
        observer.observe(&label, &value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Pipeline;
    use proptest::prelude::*;
    use std::sync::Arc;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Level, target and `label` field of every event seen.
    #[derive(Clone, Default)]
    struct EventLog(Arc<Mutex<Vec<(Level, String, String)>>>);

    impl EventLog {
        fn events(&self) -> Vec<(Level, String, String)> {
            self.0.lock().unwrap().clone()
        }
    }

    #[derive(Default)]
    struct LabelField(String);

    impl Visit for LabelField {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "label" {
                self.0 = value.to_string();
            }
        }

        fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
    }

    impl<S: Subscriber> Layer<S> for EventLog {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut label = LabelField::default();
            event.record(&mut label);
            let meta = event.metadata();
            self.0
                .lock()
                .unwrap()
                .push((*meta.level(), meta.target().to_string(), label.0));
        }
    }

    #[test]
    fn test_trace_emits_one_info_event_per_call() {
        let log = EventLog::default();
        let subscriber = tracing_subscriber::registry().with(log.clone());

        tracing::subscriber::with_default(subscriber, || {
            let tap = trace("after g");
            assert_eq!(tap(21), 21);
            assert_eq!(tap(42), 42);
        });

        let expected = (Level::INFO, "fp_common::trace".to_string(), "after g".to_string());
        assert_eq!(log.events(), vec![expected.clone(), expected]);
    }

    #[test]
    fn test_trace_returns_value_unchanged() {
        let tap = trace("value");
        assert_eq!(tap(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_trace_with_records_one_event_per_call() {
        let recorder = Recorder::new();
        let tap = trace_with(&recorder, "seen");

        assert!(recorder.is_empty());
        tap(1);
        tap(2);
        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.lines(), vec!["seen: 1", "seen: 2"]);
    }

    #[test]
    fn test_trace_in_pipeline_does_not_change_result() {
        let recorder = Recorder::new();
        let plain = Pipeline::new().then(|n: i64| n + 1).then(|n| n * 2);
        let traced = Pipeline::new()
            .then(|n: i64| n + 1)
            .then(trace_with(&recorder, "after g"))
            .then(|n| n * 2)
            .then(trace_with(&recorder, "after f"));

        assert_eq!(plain.apply(20), traced.apply(20));
        assert_eq!(recorder.lines(), vec!["after g: 21", "after f: 42"]);
    }

    #[test]
    fn test_trace_uses_debug_formatting() {
        let recorder = Recorder::new();
        trace_with(&recorder, "word")("sun");
        assert_eq!(recorder.lines(), vec!["word: \"sun\""]);
    }

    proptest! {
        #[test]
        fn prop_trace_is_transparent(value in any::<i64>(), label in "[a-z ]{1,12}") {
            let recorder = Recorder::new();
            let tap = trace_with(&recorder, label.clone());
            prop_assert_eq!(tap(value), value);
            prop_assert_eq!(recorder.lines(), vec![format!("{label}: {value}")]);
        }
    }
}
