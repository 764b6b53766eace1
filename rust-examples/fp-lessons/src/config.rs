//! Demo configuration: which lessons to run and how long the delay lesson waits.

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;

/// Default wait used by the delayed continuation chain.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// A lesson that can be selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lesson {
    ComposingFunctions,
    ComposingObjects,
    PureFunctions,
    SharedState,
    Immutability,
    Functors,
    Intro,
    HigherOrder,
    All,
}

impl Lesson {
    /// Every concrete lesson, in teaching order.
    pub const ORDERED: [Lesson; 8] = [
        Lesson::ComposingFunctions,
        Lesson::ComposingObjects,
        Lesson::PureFunctions,
        Lesson::SharedState,
        Lesson::Immutability,
        Lesson::Functors,
        Lesson::Intro,
        Lesson::HigherOrder,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Lesson::ComposingFunctions => "1.1 Composing Functions",
            Lesson::ComposingObjects => "1.2 Composing Objects",
            Lesson::PureFunctions => "5.1 Pure Functions",
            Lesson::SharedState => "6.1 Shared State",
            Lesson::Immutability => "6.2 Immutability",
            Lesson::Functors => "6.3 Functors",
            Lesson::Intro => "7.1 Functional Building Blocks",
            Lesson::HigherOrder => "8.1 Higher-Order Functions",
            Lesson::All => "All Lessons",
        }
    }

    /// The concrete lessons this selection stands for.
    #[must_use]
    pub fn expand(self) -> Vec<Lesson> {
        match self {
            Lesson::All => Self::ORDERED.to_vec(),
            lesson => vec![lesson],
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub lesson: Lesson,
    pub delay: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            lesson: Lesson::All,
            delay: DEFAULT_DELAY,
        }
    }
}

impl DemoConfig {
    #[must_use]
    pub fn with_lesson(self, lesson: Lesson) -> Self {
        Self { lesson, ..self }
    }

    #[must_use]
    pub fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_everything() {
        let config = DemoConfig::default();
        assert_eq!(config.lesson, Lesson::All);
        assert_eq!(config.delay, Duration::from_millis(500));
        assert_eq!(config.lesson.expand(), Lesson::ORDERED.to_vec());
    }

    #[test]
    fn test_single_lesson_expands_to_itself() {
        assert_eq!(Lesson::Functors.expand(), vec![Lesson::Functors]);
        assert!(!Lesson::ORDERED.contains(&Lesson::All));
    }

    #[test]
    fn test_builder_keeps_other_fields() {
        let config = DemoConfig::default()
            .with_delay(Duration::from_millis(5))
            .with_lesson(Lesson::Intro);
        assert_eq!(config.lesson, Lesson::Intro);
        assert_eq!(config.delay, Duration::from_millis(5));
    }

    #[test]
    fn test_cli_names_are_kebab_case() {
        let parsed = Lesson::from_str("higher-order", false).unwrap();
        assert_eq!(parsed, Lesson::HigherOrder);
        assert_eq!(parsed.to_string(), "8.1 Higher-Order Functions");
    }
}
