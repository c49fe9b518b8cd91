//! Result of one refresh cycle.

use jiff::{SignedDuration, Timestamp};
use serde::Serialize;

use crate::{
    models::{ReconciledRow, Warning},
    projection::Projection,
};

/// Immutable reconciled table stamped with the time it was fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    rows: Vec<ReconciledRow>,
    fetched_at: Timestamp,
    warnings: Vec<Warning>,
}

impl StatusSnapshot {
    /// Wraps the output of a refresh cycle.
    pub fn new(rows: Vec<ReconciledRow>, fetched_at: Timestamp, warnings: Vec<Warning>) -> Self {
        Self {
            rows,
            fetched_at,
            warnings,
        }
    }

    /// The reconciled table, one row per `(name, plan_id)`.
    pub fn rows(&self) -> &[ReconciledRow] {
        &self.rows
    }

    /// When the data was fetched.
    pub fn fetched_at(&self) -> Timestamp {
        self.fetched_at
    }

    /// Records dropped during the cycle.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Time elapsed between the fetch and `now`.
    pub fn age(&self, now: Timestamp) -> SignedDuration {
        now.duration_since(self.fetched_at)
    }

    /// Display-ready statuses of one environment.
    pub fn project(&self, env: &str) -> Projection {
        Projection::build(&self.rows, env, &self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionStatus, StatusEntry};

    fn snapshot() -> StatusSnapshot {
        let rows = vec![
            ReconciledRow {
                plan_id: "A".to_string(),
                name: "Load-EDW".to_string(),
                env: "ENV_PRD".to_string(),
                status: Some(ExecutionStatus::Failed),
                start_timestamp: None,
                finish_timestamp: Some("2024-01-02T10:00:00Z".parse().unwrap()),
            },
            ReconciledRow {
                plan_id: "B".to_string(),
                name: "Load-EDW".to_string(),
                env: "ENV_DEV".to_string(),
                status: Some(ExecutionStatus::Successful),
                start_timestamp: None,
                finish_timestamp: None,
            },
        ];
        StatusSnapshot::new(rows, Timestamp::from_second(1_704_189_600).unwrap(), vec![])
    }

    #[test]
    fn test_project_filters_environment() {
        let projection = snapshot().project("ENV_PRD");
        assert_eq!(projection.environment, "ENV_PRD");
        assert_eq!(
            projection.entries,
            vec![StatusEntry::new("Load-EDW", "execution_failed")]
        );
        assert!(projection.warnings.is_empty());
    }

    #[test]
    fn test_project_unknown_environment_warns() {
        let projection = snapshot().project("ENV_UAT");
        assert!(projection.is_empty());
        assert_eq!(projection.warnings.len(), 1);
    }

    #[test]
    fn test_age() {
        let snapshot = snapshot();
        let now = Timestamp::from_second(1_704_189_600 + 125).unwrap();
        assert_eq!(snapshot.age(now), SignedDuration::from_secs(125));
    }
}
