//! Backtrail main entry point
//!
//! This is the command-line interface for the backtrail link walker.

use anyhow::Context;
use backtrail::config::{load_config, WalkConfig};
use backtrail::walker::walk;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Backtrail: a depth-first web link walker
///
/// Backtrail follows hyperlinks from a seed page one step at a time,
/// backtracking to earlier pages when the current one has nothing unvisited
/// left. The visit sequence is echoed to the console and written to a
/// markdown log.
#[derive(Parser, Debug)]
#[command(name = "backtrail")]
#[command(version)]
#[command(about = "A depth-first web link walker with backtracking", long_about = None)]
struct Cli {
    /// Seed URL to start walking from
    #[arg(value_name = "SEED")]
    seed: String,

    /// Number of links to follow before stopping
    #[arg(short = 'n', long = "steps", default_value_t = 10)]
    steps: u32,

    /// Path of the markdown log to write
    #[arg(short, long, default_value = "navigation_history.md")]
    output: PathBuf,

    /// Path to an optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("failed to load {}", path.display()))?
        }
        None => WalkConfig::default(),
    };

    tracing::info!(
        "Walking from {} for up to {} step(s), logging to {}",
        cli.seed,
        cli.steps,
        cli.output.display()
    );

    let outcome = walk(&config, &cli.seed, cli.steps, &cli.output, cli.quiet)
        .await
        .context("walk failed")?;

    if !cli.quiet {
        println!(
            "Walk finished after {} step(s): {}.",
            outcome.steps_taken, outcome.reason
        );
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("backtrail=info,warn"),
            1 => EnvFilter::new("backtrail=debug,info"),
            2 => EnvFilter::new("backtrail=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
