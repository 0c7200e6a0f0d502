//! Configuration module for backtrail
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. All settings have defaults; the file only needs to
//! name what it overrides.
//!
//! # Example
//!
//! ```no_run
//! use backtrail::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("backtrail.toml")).unwrap();
//! println!("Request timeout: {}s", config.fetcher.request_timeout_secs);
//! ```

mod types;
mod validation;

use crate::ConfigResult;
use std::path::Path;

pub use types::{FetcherConfig, UserAgentConfig, WalkConfig};
pub use validation::validate;

/// Loads and validates a configuration from a TOML file
pub fn load_config(path: &Path) -> ConfigResult<WalkConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config: WalkConfig = toml::from_str(&contents)?;
    validate(&config)?;
    Ok(config)
}
