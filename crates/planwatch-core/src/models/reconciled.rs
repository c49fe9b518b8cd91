//! Rows produced by reconciliation and the projection handed to displays.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ExecutionStatus;

/// A catalog plan joined to its most recent execution in the window.
///
/// The execution fields are `None` when the plan had no usable execution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReconciledRow {
    /// Identifier of the plan
    pub plan_id: String,

    /// Name of the plan
    pub name: String,

    /// Environment of the plan
    pub env: String,

    /// Status of the selected execution
    pub status: Option<ExecutionStatus>,

    /// Start of the selected execution
    pub start_timestamp: Option<Timestamp>,

    /// Finish of the selected execution
    pub finish_timestamp: Option<Timestamp>,
}

/// The `(name, status)` pair consumed by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusEntry {
    pub name: String,
    pub status: ExecutionStatus,
}

impl StatusEntry {
    /// Create a new entry.
    pub fn new(name: impl Into<String>, status: impl Into<ExecutionStatus>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }
}
