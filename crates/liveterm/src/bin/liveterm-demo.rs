//! Demo of a live region.
//!
//! Runs a spinner through a few fake steps and finishes it with the chosen
//! outcome. Useful for eyeballing rendering in different terminals. Built
//! only with the `demo` feature (`cargo run --features demo --bin liveterm-demo`):
//!
//! ```text
//! liveterm-demo --timer
//! liveterm-demo --no-color --outcome fail
//! liveterm-demo --raw | cat
//! RUST_LOG=liveterm=debug liveterm-demo
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use liveterm::{OutputContext, Spinner};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DemoOutcome {
    Stop,
    Success,
    Warning,
    Fail,
}

/// Show a spinner that updates its message and finishes with a final line
#[derive(Debug, Parser)]
#[command(name = "liveterm-demo")]
#[command(version)]
struct Cli {
    /// Disable ANSI styling (also disables animation)
    #[arg(long)]
    no_color: bool,

    /// Print plain sequential lines
    #[arg(long)]
    raw: bool,

    /// Show the elapsed time after the message
    #[arg(long)]
    timer: bool,

    /// Erase the spinner line when it stops
    #[arg(long)]
    remove: bool,

    /// Frame delay in milliseconds
    #[arg(long, default_value_t = 100)]
    delay: u64,

    /// Time spent on each step in milliseconds
    #[arg(long, default_value_t = 800)]
    step: u64,

    /// How the spinner finishes
    #[arg(long, value_enum, default_value_t = DemoOutcome::Success)]
    outcome: DemoOutcome,
}

const STEPS: [&str; 4] = [
    "Resolving dependencies",
    "Downloading packages",
    "Compiling",
    "Linking",
];

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let ctx = OutputContext::detect()
        .with_styling(console::colors_enabled() && !cli.no_color)
        .with_raw_output(cli.raw);

    let spinner = Spinner::new()
        .with_delay(Duration::from_millis(cli.delay))
        .with_show_timer(cli.timer)
        .with_remove_when_done(cli.remove)
        .with_context(Arc::new(ctx));

    let region = spinner.start(Some(STEPS[0]))?;
    for step in STEPS {
        region.update_text(step);
        thread::sleep(Duration::from_millis(cli.step));
    }

    match cli.outcome {
        DemoOutcome::Stop => region.stop()?,
        DemoOutcome::Success => region.success(Some("Build finished"))?,
        DemoOutcome::Warning => region.warning(Some("Build finished with warnings"))?,
        DemoOutcome::Fail => region.fail(None)?,
    }
    Ok(())
}
