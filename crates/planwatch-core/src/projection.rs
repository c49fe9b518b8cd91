//! Environment filter, the boundary towards whatever displays the statuses.

use serde::Serialize;

use crate::models::{ReconciledRow, StatusEntry, Warning};

/// Restricts reconciled rows to one environment and projects them to
/// `(name, status)` pairs.
///
/// Rows of other environments and rows without a status are dropped; the
/// remaining rows keep their order.
///
/// # Examples
///
/// ```rust
/// use planwatch_core::{
///     models::{ExecutionRecord, Plan, StatusEntry},
///     project_for_environment, reconcile,
/// };
///
/// let plans = vec![
///     Plan::new("A", "Load-EDW", "ENV_PRD"),
///     Plan::new("B", "Load-EDW", "ENV_DEV"),
/// ];
/// let executions = vec![
///     ExecutionRecord::finished("A", "execution_successful", "2024-01-01T10:00:00Z"),
///     ExecutionRecord::finished("B", "execution_failed", "2024-01-01T10:00:00Z"),
/// ];
///
/// let rows = reconcile(&plans, &executions).rows;
/// assert_eq!(
///     project_for_environment(&rows, "ENV_PRD"),
///     vec![StatusEntry::new("Load-EDW", "execution_successful")]
/// );
/// ```
pub fn project_for_environment(rows: &[ReconciledRow], env: &str) -> Vec<StatusEntry> {
    rows.iter()
        .filter(|row| row.env == env)
        .filter_map(|row| {
            row.status.as_ref().map(|status| StatusEntry {
                name: row.name.clone(),
                status: status.clone(),
            })
        })
        .collect()
}

/// Display-ready statuses of one environment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    /// Environment the entries were filtered to
    pub environment: String,

    /// Entries in catalog order
    pub entries: Vec<StatusEntry>,

    /// Warnings of the refresh, plus one if no entry survived the filter
    pub warnings: Vec<Warning>,
}

impl Projection {
    /// Projects `rows` to `env`, carrying over the refresh `warnings`.
    pub fn build(rows: &[ReconciledRow], env: &str, warnings: &[Warning]) -> Self {
        let entries = project_for_environment(rows, env);
        let mut warnings = warnings.to_vec();
        if entries.is_empty() {
            warnings.push(Warning::JoinEmptyResult {
                environment: env.to_string(),
            });
        }
        Self {
            environment: env.to_string(),
            entries,
            warnings,
        }
    }

    /// Whether no plan status is available.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records dropped as malformed during the refresh.
    pub fn malformed_count(&self) -> usize {
        self.warnings.iter().filter(|w| w.is_malformed_record()).count()
    }
}
