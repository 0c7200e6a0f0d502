use serde::Deserialize;

/// Main configuration structure for backtrail
///
/// Every field has a default, so an absent or empty config file yields a
/// fully usable configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalkConfig {
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,

    #[serde(default)]
    pub fetcher: FetcherConfig,
}

/// Walker identification configuration
///
/// Used to build the identification header sent with every request so
/// operators can tell the walker apart from anonymous traffic.
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the walker
    #[serde(rename = "walker-name", default = "default_walker_name")]
    pub walker_name: String,

    /// Version of the walker
    #[serde(rename = "walker-version", default = "default_walker_version")]
    pub walker_version: String,

    /// URL with information about the walker
    #[serde(rename = "contact-url", default = "default_contact_url")]
    pub contact_url: String,

    /// Email address for walker-related contact
    #[serde(rename = "contact-email", default = "default_contact_email")]
    pub contact_email: String,
}

/// Fetcher behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Overall request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_walker_name() -> String {
    "backtrail".to_string()
}

fn default_walker_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_contact_url() -> String {
    "https://github.com/backtrail/backtrail".to_string()
}

fn default_contact_email() -> String {
    "ops@backtrail.dev".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            walker_name: default_walker_name(),
            walker_version: default_walker_version(),
            contact_url: default_contact_url(),
            contact_email: default_contact_email(),
        }
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}
