use std::time::Duration;

use crate::error::{ClientError, ClientResult};

/// Configuration for the remote broker.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address of the API host.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("skycast-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn validate(&self) -> ClientResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::Configuration(
                "base_url must not be empty".to_string(),
            ));
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let config = ClientConfig::new("");
        assert!(matches!(
            config.validate(),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn unparseable_base_url_is_rejected() {
        let config = ClientConfig::new("not a url");
        assert!(matches!(config.validate(), Err(ClientError::Url(_))));
    }

    #[test]
    fn builder_style_overrides() {
        let config = ClientConfig::new("http://api.example.com")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent");

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
    }
}
