//! Functional programming lessons built on [`fp_common`].
//!
//! Each section is a module with small functions, a `demonstrate` function
//! that prints what the section is about, and tests pinning down the
//! values it prints:
//!
//! - 1.1 Composing functions (`pipe!`, `trace`, continuation chains)
//! - 1.2 Composing objects (struct composition, mixins)
//! - 5.1 Pure functions (referential transparency, a pure cart)
//! - 6.1 Shared state
//! - 6.2 Immutability (shallow vs deep)
//! - 6.3 Functors
//! - 7.1 Functional building blocks (destructuring, rest/spread, currying)
//! - 8.1 Higher-order functions (`reduce`, `filter`)

pub mod config;
pub mod section_1_1;
pub mod section_1_2;
pub mod section_5_1;
pub mod section_6_1;
pub mod section_6_2;
pub mod section_6_3;
pub mod section_7_1;
pub mod section_8_1;

pub use config::{DemoConfig, Lesson};

/// Runs the selected lessons in order, printing each one.
pub async fn run(config: &DemoConfig) -> fp_common::Result<()> {
    for lesson in config.lesson.expand() {
        tracing::debug!(%lesson, "running lesson");
        println!("\n=== {lesson} ===");
        match lesson {
            Lesson::ComposingFunctions => section_1_1::demonstrate(config.delay).await,
            Lesson::ComposingObjects => section_1_2::demonstrate(),
            Lesson::PureFunctions => section_5_1::demonstrate()?,
            Lesson::SharedState => section_6_1::demonstrate(),
            Lesson::Immutability => section_6_2::demonstrate()?,
            Lesson::Functors => section_6_3::demonstrate(),
            Lesson::Intro => section_7_1::demonstrate(),
            Lesson::HigherOrder => section_8_1::demonstrate(),
            // never produced by `expand`
            Lesson::All => {}
        }
    }
    Ok(())
}
