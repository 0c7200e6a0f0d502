use crate::config::types::{FetcherConfig, UserAgentConfig, WalkConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &WalkConfig) -> Result<(), ConfigError> {
    validate_user_agent_config(&config.user_agent)?;
    validate_fetcher_config(&config.fetcher)?;
    Ok(())
}

/// Validates walker identification configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Walker name: non-empty, alphanumeric + hyphens only
    if config.walker_name.is_empty() {
        return Err(ConfigError::Validation(
            "walker-name cannot be empty".to_string(),
        ));
    }

    if !config
        .walker_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "walker-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.walker_name
        )));
    }

    if config.walker_version.is_empty() {
        return Err(ConfigError::Validation(
            "walker-version cannot be empty".to_string(),
        ));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;

    validate_email(&config.contact_email)?;

    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.request_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "request-timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs > config.request_timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs ({}) must not exceed request-timeout-secs ({})",
            config.connect_timeout_secs, config.request_timeout_secs
        )));
    }

    Ok(())
}

/// Basic email validation: one '@' with non-empty local and domain parts
fn validate_email(email: &str) -> Result<(), ConfigError> {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid contact-email: '{}'",
            email
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WalkConfig::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_walker_name_rejected() {
        let mut config = WalkConfig::default();
        config.user_agent.walker_name = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_walker_name_with_spaces_rejected() {
        let mut config = WalkConfig::default();
        config.user_agent.walker_name = "back trail".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_contact_url_rejected() {
        let mut config = WalkConfig::default();
        config.user_agent.contact_url = "not a url".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut config = WalkConfig::default();
        config.user_agent.contact_email = "nobody".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = WalkConfig::default();
        config.fetcher.request_timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_connect_timeout_exceeding_request_timeout_rejected() {
        let mut config = WalkConfig::default();
        config.fetcher.connect_timeout_secs = 60;
        config.fetcher.request_timeout_secs = 30;
        assert!(validate(&config).is_err());
    }
}
