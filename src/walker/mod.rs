//! Walker module - the traversal engine and its collaborators
//!
//! This module contains the core walk logic, including:
//! - The stateful step loop with visited-set bookkeeping and backtracking
//! - HTTP fetching with explicit timeouts
//! - HTML link extraction

mod engine;
mod extractor;
mod fetcher;

pub use engine::{HistoryEntry, StopReason, WalkOutcome, Walker};
pub use extractor::{HtmlLinkExtractor, LinkExtractor};
pub use fetcher::{build_http_client, FetchFailure, FetchedPage, Fetcher, HttpFetcher};

use crate::config::WalkConfig;
use crate::report::MarkdownReporter;
use crate::Result;
use std::path::Path;

/// Runs a complete walk with the production collaborators
///
/// Builds the HTTP fetcher and HTML extractor from `config`, points the
/// markdown reporter at `output`, and drives the walk from `seed_url` for at
/// most `max_steps` advances.
pub async fn walk(
    config: &WalkConfig,
    seed_url: &str,
    max_steps: u32,
    output: &Path,
    quiet: bool,
) -> Result<WalkOutcome> {
    let fetcher = HttpFetcher::new(&config.user_agent, &config.fetcher)?;
    let reporter = if quiet {
        MarkdownReporter::create_quiet(output)?
    } else {
        MarkdownReporter::create(output)?
    };

    let mut walker = Walker::new(fetcher, HtmlLinkExtractor, reporter);
    walker.run(seed_url, max_steps).await
}
