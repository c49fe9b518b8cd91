//! Monitor configuration.
//!
//! Configuration comes from an optional JSON file, by default
//! `$XDG_CONFIG_HOME/planwatch/config.json`, with every field falling back
//! to its default when absent. Interfaces overlay their own flags on top of
//! the loaded value before handing it to
//! [`MonitorBuilder`](crate::monitor::MonitorBuilder), which validates it.
//!
//! ```json
//! {
//!   "region": "eu",
//!   "windowDays": 7,
//!   "pageSize": 100,
//!   "targetEnvironment": "ENV_PRD"
//! }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, Result};

/// Environment variable consulted for the API token by interfaces.
pub const API_TOKEN_ENV: &str = "PLANWATCH_API_TOKEN";

/// Upper bound for the exponential retry backoff.
pub const MAX_RETRY_BACKOFF: Duration = Duration::from_secs(10);

/// Settings consumed by the fetchers and the refresh cycle.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MonitorConfig {
    /// Platform region, selects the API host
    pub region: String,

    /// Explicit API base URL, overrides the region-derived host
    pub base_url: Option<String>,

    /// Bearer token for the API
    pub api_token: Option<String>,

    /// Trailing window of execution history, in days
    pub window_days: u32,

    /// Items requested per execution page
    pub page_size: u32,

    /// Maximum number of execution pages per refresh
    pub max_pages: u32,

    /// Environment whose statuses are displayed
    pub target_environment: String,

    /// Per-request timeout, in seconds
    pub timeout_secs: u64,

    /// Retries after the first attempt for transient failures
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds; doubles each attempt
    pub retry_backoff_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            region: "eu".to_string(),
            base_url: None,
            api_token: None,
            window_days: 7,
            page_size: 100,
            max_pages: 1000,
            target_environment: "ENV_PRD".to_string(),
            timeout_secs: 30,
            max_retries: 3,
            retry_backoff_ms: 500,
        }
    }
}

impl std::fmt::Debug for MonitorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorConfig")
            .field("region", &self.region)
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("window_days", &self.window_days)
            .field("page_size", &self.page_size)
            .field("max_pages", &self.max_pages)
            .field("target_environment", &self.target_environment)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_ms", &self.retry_backoff_ms)
            .finish()
    }
}

impl MonitorConfig {
    /// Reads a configuration file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::FileSystem` if the file cannot be read and
    /// `MonitorError::Serialization` if it is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| MonitorError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Loads the file at `path`, or the XDG default location when `path` is
    /// `None`. Falls back to defaults when no default file exists.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_config_path() {
                Some(path) => {
                    log::debug!("Loading configuration from {}", path.display());
                    Self::load(&path)
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Returns the XDG config file if one exists.
    pub fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("planwatch").find_config_file("config.json")
    }

    /// Base URL of the API, without a trailing slash.
    pub fn api_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://api.{}.cloud.talend.com", self.region),
        }
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Delay before the first retry, never above [`MAX_RETRY_BACKOFF`].
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms).min(MAX_RETRY_BACKOFF)
    }

    /// Checks every field that would make a refresh impossible.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        match self.api_token.as_deref() {
            Some(token) if !token.trim().is_empty() => {}
            _ => {
                return Err(MonitorError::invalid_input("api_token")
                    .with_reason(format!("an API token is required (set {API_TOKEN_ENV})")))
            }
        }
        if self.base_url.is_none() && self.region.trim().is_empty() {
            return Err(MonitorError::invalid_input("region").with_reason("must not be empty"));
        }
        if self.window_days == 0 {
            return Err(
                MonitorError::invalid_input("window_days").with_reason("must be at least 1 day")
            );
        }
        if self.page_size == 0 {
            return Err(MonitorError::invalid_input("page_size").with_reason("must be at least 1"));
        }
        if self.max_pages == 0 {
            return Err(MonitorError::invalid_input("max_pages").with_reason("must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(
                MonitorError::invalid_input("timeout_secs").with_reason("must be at least 1 second")
            );
        }
        if self.target_environment.trim().is_empty() {
            return Err(
                MonitorError::invalid_input("target_environment").with_reason("must not be empty")
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn valid_config() -> MonitorConfig {
        MonitorConfig {
            api_token: Some("secret".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.region, "eu");
        assert_eq!(config.window_days, 7);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.target_environment, "ENV_PRD");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_base_url_from_region() {
        let config = MonitorConfig {
            region: "us".to_string(),
            ..Default::default()
        };
        assert_eq!(config.api_base_url(), "https://api.us.cloud.talend.com");
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let config = MonitorConfig {
            base_url: Some("http://127.0.0.1:1234/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.api_base_url(), "http://127.0.0.1:1234");
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, r#"{{"region": "ap", "windowDays": 3, "targetEnvironment": "ENV_UAT"}}"#)
            .expect("Failed to write config");

        let config = MonitorConfig::load(file.path()).expect("Failed to load config");
        assert_eq!(config.region, "ap");
        assert_eq!(config.window_days, 3);
        assert_eq!(config.target_environment, "ENV_UAT");
        assert_eq!(config.page_size, 100);
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_load_missing_file_is_filesystem_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = MonitorConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, MonitorError::FileSystem { .. }));
    }

    #[test]
    fn test_load_invalid_json_is_serialization_error() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "not json").expect("Failed to write config");
        let err = MonitorConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, MonitorError::Serialization { .. }));
    }

    #[test]
    fn test_validate_requires_token() {
        let err = MonitorConfig::default().validate().unwrap_err();
        assert!(matches!(err, MonitorError::InvalidInput { ref field, .. } if field == "api_token"));

        let blank = MonitorConfig {
            api_token: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        assert!(valid_config().validate().is_ok());

        let config = MonitorConfig {
            page_size: 0,
            ..valid_config()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, MonitorError::InvalidInput { ref field, .. } if field == "page_size"));

        let config = MonitorConfig {
            window_days: 0,
            ..valid_config()
        };
        assert!(config.validate().is_err());

        let config = MonitorConfig {
            max_pages: 0,
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let output = format!("{:?}", valid_config());
        assert!(!output.contains("secret"));
        assert!(output.contains("<redacted>"));
    }

    #[test]
    fn test_first_retry_backoff_is_capped() {
        let config = MonitorConfig {
            retry_backoff_ms: 60_000,
            ..Default::default()
        };
        assert_eq!(config.retry_backoff(), MAX_RETRY_BACKOFF);

        let config = MonitorConfig {
            retry_backoff_ms: 250,
            ..Default::default()
        };
        assert_eq!(config.retry_backoff(), Duration::from_millis(250));
    }
}
