//! Outbound HTTP client
//!
//! A single [`reqwest::Client`] is built at startup and shared by every
//! adapter that talks to an external service. The client pools connections
//! internally, so clones are cheap.

use std::time::Duration;

/// Default timeout applied to every outbound request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Outbound HTTP client settings
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Whole-request timeout (connect + send + receive)
    pub timeout: Duration,
    /// Value sent in the User-Agent header
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("contact-backend/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Error when building the outbound client
#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Build the shared outbound client
pub fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::Client, HttpClientError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("contact-backend/"));
    }

    #[test]
    fn test_build_client() {
        let config = HttpClientConfig {
            timeout: Duration::from_secs(3),
            ..HttpClientConfig::default()
        };
        assert!(build_http_client(&config).is_ok());
    }
}
