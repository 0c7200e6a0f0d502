//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the walker, including:
//! - Building an HTTP client with the configured identification header
//! - GET requests with explicit request and connect timeouts
//! - Error classification (HTTP status, timeout, connection, other)

use crate::config::{FetcherConfig, UserAgentConfig};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after any redirects the client followed
    pub final_url: String,

    /// HTTP status code
    pub status_code: u16,

    /// Page body content
    pub body: String,
}

/// Why a fetch failed
///
/// The `Display` text is interpolated into the walk's error report lines as
/// the underlying cause.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("HTTP status {code}")]
    Status { code: u16 },

    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("{0}")]
    Other(String),
}

/// Capability for fetching a page by URL
///
/// The walker holds exactly one fetcher and calls it once per step; failures
/// are recovered by backtracking, never propagated out of the run.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchFailure>;
}

/// Builds an HTTP client with proper configuration
///
/// The identification header has the form
/// `WalkerName/Version (+ContactURL; ContactEmail)` so operators can
/// attribute the traffic. Redirect handling is left to the client's default
/// policy.
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    fetcher: &FetcherConfig,
) -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{} (+{}; {})",
        user_agent.walker_name,
        user_agent.walker_version,
        user_agent.contact_url,
        user_agent.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(fetcher.request_timeout_secs))
        .connect_timeout(Duration::from_secs(fetcher.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Production fetcher backed by a [`reqwest::Client`]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher from configuration
    pub fn new(
        user_agent: &UserAgentConfig,
        fetcher: &FetcherConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(user_agent, fetcher)?,
        })
    }

    /// Wraps an already-built client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchFailure> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status {
                code: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(classify_transport_error)?;

        Ok(FetchedPage {
            final_url,
            status_code: status.as_u16(),
            body,
        })
    }
}

/// Classifies a transport-level error into a [`FetchFailure`]
fn classify_transport_error(e: reqwest::Error) -> FetchFailure {
    if e.is_timeout() {
        FetchFailure::Timeout
    } else if e.is_connect() {
        FetchFailure::Connect(e.to_string())
    } else {
        FetchFailure::Other(e.to_string())
    }
}
