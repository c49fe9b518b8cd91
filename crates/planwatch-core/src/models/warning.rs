//! Non-fatal diagnostics collected during a refresh cycle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which feed a dropped record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSource {
    /// The plan catalog endpoint
    Catalog,

    /// The execution history endpoint
    Executions,
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSource::Catalog => write!(f, "catalog"),
            RecordSource::Executions => write!(f, "executions"),
        }
    }
}

/// A problem that cost at most one record and never aborts a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Warning {
    /// A record was dropped because a field was missing or unparsable
    MalformedRecord {
        source: RecordSource,
        plan_id: Option<String>,
        reason: String,
    },

    /// Nothing survived the join and environment filter
    JoinEmptyResult { environment: String },
}

impl Warning {
    /// Build a malformed-record warning.
    pub fn malformed(
        source: RecordSource,
        plan_id: Option<&str>,
        reason: impl Into<String>,
    ) -> Self {
        Warning::MalformedRecord {
            source,
            plan_id: plan_id.map(str::to_string),
            reason: reason.into(),
        }
    }

    /// Whether this warning reports a dropped record.
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, Warning::MalformedRecord { .. })
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MalformedRecord {
                source,
                plan_id: Some(plan_id),
                reason,
            } => write!(f, "Skipped {source} record for plan {plan_id}: {reason}"),
            Warning::MalformedRecord {
                source,
                plan_id: None,
                reason,
            } => write!(f, "Skipped {source} record: {reason}"),
            Warning::JoinEmptyResult { environment } => {
                write!(f, "No plan statuses found for environment {environment}")
            }
        }
    }
}
