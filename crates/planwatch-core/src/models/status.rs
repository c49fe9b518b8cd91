//! Execution status reported by the orchestration platform.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Outcome of a single plan execution.
///
/// The platform owns this vocabulary and may add values at any time, so the
/// enum is open: values without a dedicated variant are kept verbatim in
/// [`ExecutionStatus::Other`] and serialize back to the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExecutionStatus {
    /// The execution finished successfully
    Successful,

    /// The execution finished with a failure
    Failed,

    /// The execution is still running
    Executing,

    /// Any other platform-defined status
    Other(String),
}

impl ExecutionStatus {
    /// The wire representation used by the platform.
    pub fn as_str(&self) -> &str {
        match self {
            ExecutionStatus::Successful => "execution_successful",
            ExecutionStatus::Failed => "execution_failed",
            ExecutionStatus::Executing => "executing",
            ExecutionStatus::Other(value) => value,
        }
    }

    /// Whether this status describes a finished execution that did not
    /// succeed.
    ///
    /// Unknown values are matched loosely: anything mentioning `failed`,
    /// `rejected` or `terminated` counts as a failure.
    pub fn is_failure(&self) -> bool {
        match self {
            ExecutionStatus::Failed => true,
            ExecutionStatus::Successful | ExecutionStatus::Executing => false,
            ExecutionStatus::Other(value) => {
                let value = value.to_lowercase();
                value.contains("failed")
                    || value.contains("rejected")
                    || value.contains("terminated")
            }
        }
    }

    /// Get status with an icon prefix for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planwatch_core::models::ExecutionStatus;
    ///
    /// assert_eq!(ExecutionStatus::Successful.with_icon(), "✓ execution_successful");
    /// assert_eq!(ExecutionStatus::Failed.with_icon(), "✗ execution_failed");
    /// assert_eq!(ExecutionStatus::Executing.with_icon(), "➤ executing");
    /// ```
    pub fn with_icon(&self) -> String {
        let icon = match self {
            ExecutionStatus::Successful => "✓",
            ExecutionStatus::Failed => "✗",
            ExecutionStatus::Executing => "➤",
            ExecutionStatus::Other(_) if self.is_failure() => "✗",
            ExecutionStatus::Other(_) => "○",
        };
        format!("{icon} {}", self.as_str())
    }
}

impl FromStr for ExecutionStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "execution_successful" => ExecutionStatus::Successful,
            "execution_failed" => ExecutionStatus::Failed,
            "executing" => ExecutionStatus::Executing,
            other => ExecutionStatus::Other(other.to_string()),
        })
    }
}

impl From<String> for ExecutionStatus {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(ExecutionStatus::Other(_)) | Err(_) => ExecutionStatus::Other(value),
            Ok(known) => known,
        }
    }
}

impl From<&str> for ExecutionStatus {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<ExecutionStatus> for String {
    fn from(status: ExecutionStatus) -> Self {
        match status {
            ExecutionStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
