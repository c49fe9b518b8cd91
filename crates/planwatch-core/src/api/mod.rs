//! HTTP access to the orchestration platform API.
//!
//! [`ApiClient`] wraps a `reqwest` client with bearer authentication, a
//! per-request timeout and bounded retries. The two feeds it reads live in
//! their own files: [`catalog`] for the plan catalog and [`executions`] for
//! the paginated execution history. Wire shapes and their conversion into
//! domain models are in [`wire`].

use std::time::Duration;

use log::{debug, warn};
use reqwest::{header, Client};
use serde::Deserialize;

use crate::{
    config::{MonitorConfig, MAX_RETRY_BACKOFF},
    error::{MonitorError, Result},
    models::Warning,
};

pub mod catalog;
pub mod executions;
pub mod wire;

/// Plan catalog endpoint.
pub const PLANS_ENDPOINT: &str = "/orchestration/executables/plans";

/// Execution history endpoint.
pub const EXECUTIONS_ENDPOINT: &str = "/processing/executables/plans/executions";

/// Records decoded from one feed, with a warning for each dropped record.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub warnings: Vec<Warning>,
}

impl<T> Default for Fetched<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl<T> Fetched<T> {
    /// Appends another batch, keeping input order.
    pub fn extend(&mut self, other: Fetched<T>) {
        self.items.extend(other.items);
        self.warnings.extend(other.warnings);
    }
}

/// Response envelope shared by both endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub(crate) items: Option<Vec<serde_json::Value>>,
}

/// Authenticated client for the platform API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_token: String,
    page_size: u32,
    max_pages: u32,
    max_retries: u32,
    retry_backoff: Duration,
}

impl ApiClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::InvalidInput` if the configuration is invalid
    /// and `MonitorError::Configuration` if the HTTP client cannot be built.
    pub fn new(config: &MonitorConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| MonitorError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.api_base_url(),
            api_token: config.api_token.clone().unwrap_or_default(),
            page_size: config.page_size,
            max_pages: config.max_pages,
            max_retries: config.max_retries,
            retry_backoff: config.retry_backoff(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs an envelope, retrying transient failures with exponential backoff.
    pub(crate) async fn get_envelope(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<Envelope> {
        let mut attempt = 0;
        let mut delay = self.retry_backoff;

        loop {
            match self.get_envelope_once(endpoint, query).await {
                Ok(envelope) => return Ok(envelope),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    warn!(
                        "Request to {endpoint} failed ({e}); retry {attempt}/{} in {delay:?}",
                        self.max_retries
                    );
                    tokio::time::sleep(delay).await;
                    delay = next_backoff(delay);
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_envelope_once(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Envelope> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {url} {query:?}");

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_token))
            .header(header::CONTENT_TYPE, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| MonitorError::Transport {
                endpoint: endpoint.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MonitorError::RemoteFetch {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| MonitorError::Transport {
            endpoint: endpoint.to_string(),
            source: e,
        })?;
        serde_json::from_slice(&bytes).map_err(|e| MonitorError::decode(endpoint, e.to_string()))
    }
}

/// Doubles the delay, capped at [`MAX_RETRY_BACKOFF`].
fn next_backoff(current: Duration) -> Duration {
    (current * 2).min(MAX_RETRY_BACKOFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_until_cap() {
        assert_eq!(
            next_backoff(Duration::from_millis(500)),
            Duration::from_secs(1)
        );
        assert_eq!(next_backoff(Duration::from_secs(4)), Duration::from_secs(8));
        assert_eq!(next_backoff(Duration::from_secs(8)), MAX_RETRY_BACKOFF);
        assert_eq!(next_backoff(MAX_RETRY_BACKOFF), MAX_RETRY_BACKOFF);
    }

    #[test]
    fn test_client_requires_valid_config() {
        let err = ApiClient::new(&MonitorConfig::default()).err().unwrap();
        assert!(matches!(err, MonitorError::InvalidInput { .. }));
    }

    #[test]
    fn test_client_uses_config_base_url() {
        let config = MonitorConfig {
            api_token: Some("token".to_string()),
            base_url: Some("http://localhost:9999/".to_string()),
            ..Default::default()
        };
        let client = ApiClient::new(&config).expect("Failed to build client");
        assert_eq!(client.base_url(), "http://localhost:9999");
    }

    #[test]
    fn test_client_caps_configured_backoff() {
        let config = MonitorConfig {
            api_token: Some("token".to_string()),
            retry_backoff_ms: 60_000,
            ..Default::default()
        };
        let client = ApiClient::new(&config).expect("Failed to build client");
        assert_eq!(client.retry_backoff, MAX_RETRY_BACKOFF);
    }

    #[test]
    fn test_fetched_extend_keeps_order() {
        let mut first = Fetched {
            items: vec![1, 2],
            warnings: vec![],
        };
        first.extend(Fetched {
            items: vec![3],
            warnings: vec![Warning::JoinEmptyResult {
                environment: "ENV_PRD".to_string(),
            }],
        });
        assert_eq!(first.items, vec![1, 2, 3]);
        assert_eq!(first.warnings.len(), 1);
    }
}
