//! Section 1.1: Composing Functions
//!
//! Function composition is applying a function to the output of another
//! function. This section goes from naming every intermediate value, to
//! nesting calls, to point-free pipelines with a tracing tap in between.
//!
//! Chaining continuations on a future is composition too: each `map`
//! feeds the previous result into the next function.

use std::future::Future;
use std::time::Duration;

use fp_common::{ConsoleObserver, Observer, Pipeline, pipe, trace_with};
use futures::FutureExt;

/// Wraps on overflow, like `f`.
pub fn g(n: i64) -> i64 {
    n.wrapping_add(1)
}

pub fn f(n: i64) -> i64 {
    n.wrapping_mul(2)
}

/// Composition spelled out, one named step at a time.
pub fn do_stuff(x: i64) -> i64 {
    let after_g = g(x);
    f(after_g)
}

/// The same composition as a one-liner.
pub fn do_stuff_better(x: i64) -> i64 {
    f(g(x))
}

/// Reports each intermediate value by hand.
pub fn do_stuff_and_log<O: Observer>(x: i64, observer: &O) -> i64 {
    let after_g = g(x);
    observer.observe("after g", &after_g);
    let after_f = f(after_g);
    observer.observe("after f", &after_f);
    after_f
}

/// Reporting factored out into a tap.
pub fn do_stuff_and_log2<O: Observer>(x: i64, observer: &O) -> i64 {
    let after_g = trace_with(observer, "after g")(g(x));
    trace_with(observer, "after f")(f(after_g))
}

/// Point-free: no argument is named anywhere.
pub fn do_stuff_best<O: Observer>(observer: &O) -> impl Fn(i64) -> i64 + '_ {
    pipe!(
        g,
        trace_with(observer, "after g"),
        f,
        trace_with(observer, "after f"),
    )
}

/// The same pipeline, assembled at runtime.
pub fn do_stuff_pipeline<O: Observer>(observer: &O) -> Pipeline<'_, i64> {
    Pipeline::new()
        .then(g)
        .then(trace_with(observer, "after g"))
        .then(f)
        .then(trace_with(observer, "after f"))
}

/// Resolves once, after `duration`.
pub async fn wait(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Waits, then runs `100` through `g` and `f`: resolves to 202.
pub fn delayed_chain(delay: Duration) -> impl Future<Output = i64> {
    wait(delay).map(|()| 100).map(g).map(f)
}

/// [`delayed_chain`] with a tap after every continuation.
pub fn delayed_chain_traced<O: Observer>(
    delay: Duration,
    observer: &O,
) -> impl Future<Output = i64> + '_ {
    wait(delay)
        .map(|()| 100)
        .map(trace_with(observer, "resolved"))
        .map(g)
        .map(trace_with(observer, "after g"))
        .map(f)
        .map(trace_with(observer, "after f"))
}

pub async fn demonstrate(delay: Duration) {
    let console = ConsoleObserver;

    println!("do_stuff(20) = {}", do_stuff(20));
    println!("do_stuff_better(22) = {}", do_stuff_better(22));

    println!("\nLogging by hand:");
    println!("result = {}", do_stuff_and_log(20, &console));

    println!("\nLogging with a tap:");
    println!("result = {}", do_stuff_and_log2(20, &console));

    println!("\nPoint-free pipe:");
    println!("result = {}", do_stuff_best(&console)(10));

    tracing::debug!(?delay, "waiting before continuation chain");
    println!("\nContinuation chain after {}ms:", delay.as_millis());
    let value = delayed_chain_traced(delay, &console).await;
    println!("resolved to {value}");
}
