//! Execution history record.

use serde::{Deserialize, Serialize};

use super::ExecutionStatus;

/// One execution of a plan as reported by the platform.
///
/// Timestamps are kept as the raw strings received from the API. Parsing
/// happens during reconciliation, where a record with an unparsable value
/// is dropped and reported rather than failing the whole fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecutionRecord {
    /// Identifier of the executed plan
    pub plan_id: String,

    /// Outcome reported by the platform
    pub status: ExecutionStatus,

    /// When the execution started (RFC 3339)
    pub start_timestamp: Option<String>,

    /// When the execution finished (RFC 3339), absent while in flight
    pub finish_timestamp: Option<String>,
}

impl ExecutionRecord {
    /// Create a record for a finished execution.
    pub fn finished(
        plan_id: impl Into<String>,
        status: impl Into<ExecutionStatus>,
        finish_timestamp: impl Into<String>,
    ) -> Self {
        Self {
            plan_id: plan_id.into(),
            status: status.into(),
            start_timestamp: None,
            finish_timestamp: Some(finish_timestamp.into()),
        }
    }

    /// Create a record for an execution that has not finished yet.
    pub fn in_flight(plan_id: impl Into<String>, status: impl Into<ExecutionStatus>) -> Self {
        Self {
            plan_id: plan_id.into(),
            status: status.into(),
            start_timestamp: None,
            finish_timestamp: None,
        }
    }

    /// Set the start timestamp.
    pub fn with_start(mut self, start_timestamp: impl Into<String>) -> Self {
        self.start_timestamp = Some(start_timestamp.into());
        self
    }
}
