//! Backtrail: a depth-first web link walker with backtracking
//!
//! This crate follows hyperlinks from a seed page one new page at a time,
//! recording the sequence of pages visited. When the current page has no
//! unvisited outbound link left, the walker unwinds its history of deferred
//! pages, most recent first, until it finds one with untried links and
//! resumes from there.

pub mod config;
pub mod report;
pub mod walker;

use thiserror::Error;

/// Main error type for backtrail operations
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Report error: {0}")]
    Report(#[from] report::ReportError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for backtrail operations
pub type Result<T> = std::result::Result<T, WalkError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::WalkConfig;
pub use report::{MarkdownReporter, Reporter};
pub use walker::{StopReason, WalkOutcome, Walker};
