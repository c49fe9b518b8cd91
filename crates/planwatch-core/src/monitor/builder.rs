//! Builder for creating and configuring Monitor instances.

use super::Monitor;
use crate::{api::ApiClient, config::MonitorConfig, error::Result};

/// Builder for creating and configuring Monitor instances.
#[derive(Debug, Clone, Default)]
pub struct MonitorBuilder {
    config: MonitorConfig,
}

impl MonitorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: MonitorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the API token.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.config.api_token = Some(token.into());
        self
    }

    /// Points the monitor at an explicit API base URL instead of the
    /// region-derived host.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Builds the configured monitor instance.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::InvalidInput` if the configuration is invalid
    /// Returns `MonitorError::Configuration` if the HTTP client cannot be built
    pub fn build(self) -> Result<Monitor> {
        let client = ApiClient::new(&self.config)?;
        Ok(Monitor::new(client, self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MonitorError;

    #[test]
    fn test_build_without_token_fails() {
        let err = MonitorBuilder::new().build().err().unwrap();
        assert!(matches!(err, MonitorError::InvalidInput { ref field, .. } if field == "api_token"));
    }

    #[test]
    fn test_builder_overrides_apply() {
        let monitor = MonitorBuilder::new()
            .with_config(MonitorConfig {
                window_days: 3,
                ..Default::default()
            })
            .with_api_token("token")
            .with_base_url("http://localhost:8080")
            .build()
            .expect("Failed to build monitor");

        assert_eq!(monitor.config().window_days, 3);
        assert_eq!(
            monitor.config().base_url.as_deref(),
            Some("http://localhost:8080")
        );
    }
}
