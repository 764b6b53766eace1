//! Lessons demo: prints the functional programming lessons.
//!
//! Run with: cargo run --bin lessons-demo -- --lesson composing-functions

use std::time::Duration;

use anyhow::Result;
use clap::{ArgAction, Parser};
use fp_lessons::{DemoConfig, Lesson};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lessons-demo", version, about = "Functional programming lessons")]
struct Cli {
    /// Lesson to run
    #[arg(long, value_enum, default_value_t = Lesson::All)]
    lesson: Lesson,

    /// Delay before the continuation chain resolves, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> DemoConfig {
        DemoConfig::default()
            .with_lesson(self.lesson)
            .with_delay(Duration::from_millis(self.delay_ms))
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let config = cli.config();
    tracing::info!(lesson = %config.lesson, delay_ms = cli.delay_ms, "starting lessons");
    fp_lessons::run(&config).await?;
    Ok(())
}
