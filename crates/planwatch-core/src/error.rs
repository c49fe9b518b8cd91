//! Error types for the monitoring library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all monitor operations.
///
/// Every variant here is fatal for the refresh cycle that produced it.
/// Record-level problems that only cost a single row are reported as
/// [`Warning`](crate::models::Warning)s instead.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// The remote API answered with a non-2xx status
    #[error("Remote fetch from '{endpoint}' failed with status {status}: {body}")]
    RemoteFetch {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Execution history kept returning pages past the configured cap
    #[error("Pagination of '{endpoint}' exceeded {max_pages} pages without an empty page")]
    PaginationExhausted { endpoint: String, max_pages: u32 },
    /// Connection, timeout or other transport failure after all retries
    #[error("Transport error talking to '{endpoint}': {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// The response envelope could not be decoded
    #[error("Could not decode response from '{endpoint}': {reason}")]
    Decode { endpoint: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> MonitorError {
        MonitorError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl MonitorError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a decode error for the given endpoint.
    pub fn decode(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Returns the HTTP status code when the remote API rejected the request.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RemoteFetch { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether another attempt at the same request could succeed.
    ///
    /// Server errors and transport failures are transient; client errors and
    /// everything that happens after a response was accepted are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RemoteFetch { status, .. } => *status >= 500,
            Self::Transport { .. } => true,
            _ => false,
        }
    }
}

/// Result type alias for monitor operations
pub type Result<T> = std::result::Result<T, MonitorError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(status: u16) -> MonitorError {
        MonitorError::RemoteFetch {
            endpoint: "/orchestration/executables/plans".to_string(),
            status,
            body: String::new(),
        }
    }

    #[test]
    fn test_server_errors_are_transient() {
        assert!(remote(500).is_transient());
        assert!(remote(503).is_transient());
    }

    #[test]
    fn test_client_errors_are_not_transient() {
        assert!(!remote(400).is_transient());
        assert!(!remote(401).is_transient());
        assert!(!remote(404).is_transient());
        assert!(!MonitorError::decode("/x", "bad json").is_transient());
    }

    #[test]
    fn test_status_code_only_for_remote_errors() {
        assert_eq!(remote(403).status_code(), Some(403));
        assert_eq!(
            MonitorError::invalid_input("page_size")
                .with_reason("must be positive")
                .status_code(),
            None
        );
    }

    #[test]
    fn test_error_messages_name_the_endpoint() {
        let err = remote(502);
        let message = err.to_string();
        assert!(message.contains("/orchestration/executables/plans"));
        assert!(message.contains("502"));

        let err = MonitorError::PaginationExhausted {
            endpoint: "/processing/executables/plans/executions".to_string(),
            max_pages: 5,
        };
        assert!(err.to_string().contains("5 pages"));
    }
}
