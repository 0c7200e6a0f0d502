//! Traversal engine - the stateful depth-first walk
//!
//! This module contains the step loop that drives the walk:
//! - Fetching the current page and extracting its links
//! - Filtering against the visited set and advancing along the first
//!   unvisited link
//! - Backtracking through the history stack when a page is exhausted
//! - Recovering from fetch errors by returning to the previous page
//!
//! All three error kinds are handled inside the loop; a run always completes
//! with a termination reason rather than raising.

use crate::report::Reporter;
use crate::walker::extractor::LinkExtractor;
use crate::walker::fetcher::Fetcher;
use crate::Result;
use std::collections::HashSet;
use std::fmt;
use url::Url;

/// A page the walk has advanced past, with the links on it not yet tried
///
/// Entries are owned exclusively by the history stack. An entry with an
/// empty tail is valid; the backtrack scan discards it on sight.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub url: String,
    pub remaining_links: Vec<String>,
}

/// Why a walk stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured number of advances was performed
    BudgetExhausted,

    /// No unvisited link anywhere in the current page or the history
    LinksExhausted,

    /// A fetch failed with no previous page to return to
    HistoryExhaustedOnFetchError,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetExhausted => write!(f, "step budget exhausted"),
            Self::LinksExhausted => {
                write!(f, "no unvisited links available, and no more pages to return to")
            }
            Self::HistoryExhaustedOnFetchError => write!(f, "no previous page"),
        }
    }
}

/// Completion status of a walk
#[derive(Debug, Clone, Copy)]
pub struct WalkOutcome {
    /// Number of successful advances performed
    pub steps_taken: u32,

    /// Why the walk stopped
    pub reason: StopReason,
}

/// The traversal engine
///
/// Owns the visited set, the backtracking history stack, and the three
/// collaborator capabilities. One instance drives one walk; the visited set
/// does not survive the run.
pub struct Walker<F, E, R> {
    fetcher: F,
    extractor: E,
    reporter: R,
    visited: HashSet<String>,
    history: Vec<HistoryEntry>,
}

impl<F, E, R> Walker<F, E, R>
where
    F: Fetcher,
    E: LinkExtractor,
    R: Reporter,
{
    /// Creates a walker from its three collaborators
    pub fn new(fetcher: F, extractor: E, reporter: R) -> Self {
        Self {
            fetcher,
            extractor,
            reporter,
            visited: HashSet::new(),
            history: Vec::new(),
        }
    }

    /// Runs the walk from `seed_url`, performing at most `max_steps`
    /// successful advances
    ///
    /// The seed is not validated up front; the first fetch decides whether
    /// it is usable. The reporter is finalized exactly once before this
    /// returns, on every termination path.
    pub async fn run(&mut self, seed_url: &str, max_steps: u32) -> Result<WalkOutcome> {
        let outcome = self.walk_loop(seed_url, max_steps).await;
        let finalized = self.reporter.finalize();
        let outcome = outcome?;
        finalized?;

        tracing::info!(
            "Walk stopped after {} step(s): {}",
            outcome.steps_taken,
            outcome.reason
        );
        Ok(outcome)
    }

    async fn walk_loop(&mut self, seed_url: &str, max_steps: u32) -> Result<WalkOutcome> {
        let mut current = seed_url.to_string();
        let mut steps: u32 = 0;

        while steps < max_steps {
            let page = match self.fetcher.fetch(&current).await {
                Ok(page) => page,
                Err(cause) => {
                    self.reporter
                        .report(&format!("Error accessing the page {}: {}", current, cause))?;

                    // Recover by returning to the most recently deferred
                    // page. Its remaining links are dropped here; the next
                    // step refetches the page and rediscovers them.
                    match self.history.pop() {
                        Some(entry) => {
                            current = entry.url;
                            self.reporter
                                .report(&format!("Returning to previous page: {}", current))?;
                            continue;
                        }
                        None => {
                            self.reporter.report("No previous page to return to. Stopping.")?;
                            return Ok(WalkOutcome {
                                steps_taken: steps,
                                reason: StopReason::HistoryExhaustedOnFetchError,
                            });
                        }
                    }
                }
            };

            tracing::debug!(
                "Fetched {} (HTTP {}, {} bytes)",
                current,
                page.status_code,
                page.body.len()
            );

            // Extraction is total; an unparseable current URL yields no links
            // and is handled by the backtrack below.
            let links = match Url::parse(&current) {
                Ok(base) => self.extractor.extract_links(&page.body, &base),
                Err(_) => Vec::new(),
            };

            let mut unvisited: Vec<String> = links
                .into_iter()
                .filter(|link| !self.visited.contains(link))
                .collect();

            if unvisited.is_empty() {
                // Backtrack: scan the history for a page with untried links.
                // Empty-tail entries are discarded on the way down. Adopted
                // links are taken as-is, without re-filtering.
                loop {
                    match self.history.pop() {
                        Some(entry) if !entry.remaining_links.is_empty() => {
                            tracing::debug!("Backtracking to {}", entry.url);
                            current = entry.url;
                            unvisited = entry.remaining_links;
                            break;
                        }
                        Some(_) => continue,
                        None => {
                            self.reporter.report(
                                "No unvisited links available, and no more pages to return to. Stopping.",
                            )?;
                            return Ok(WalkOutcome {
                                steps_taken: steps,
                                reason: StopReason::LinksExhausted,
                            });
                        }
                    }
                }
            }

            // Advance along the first unvisited link and defer the rest.
            // The tail may be empty; such entries are skipped when the
            // history is next consulted.
            let next = unvisited.remove(0);
            self.history.push(HistoryEntry {
                url: current.clone(),
                remaining_links: unvisited,
            });

            self.reporter.report(&format!("Current page: {}", current))?;
            self.reporter.report(&format!("Following link: {}\n", next))?;

            // The current page only becomes visited now, at the moment a
            // link from it is followed. A run with no advances never marks
            // the seed.
            self.visited.insert(current);
            self.visited.insert(next.clone());

            current = next;
            steps += 1;
        }

        Ok(WalkOutcome {
            steps_taken: steps,
            reason: StopReason::BudgetExhausted,
        })
    }

    /// URLs marked visited so far
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// Current depth of the backtracking history
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }
}
