//! Join of the plan catalog with execution history.
//!
//! [`reconcile`] left-joins catalog plans to their executions on the plan
//! identifier and keeps, for every `(name, plan_id)` pair, the execution
//! with the latest finish time.
//!
//! Selection rules:
//!
//! - Executions without a finish time (still running) only win when the pair
//!   has no finished execution at all.
//! - When several executions share the latest finish time, the one that
//!   appears last in the input wins. The platform exposes no secondary key to
//!   order them by, so the result depends on the order the API returned them.
//! - Plans without any usable execution are kept with empty execution fields.
//!
//! Rows come out in the order their pair first appears in the catalog.

use std::collections::HashMap;

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};
use log::debug;

use crate::models::{
    ExecutionRecord, ExecutionStatus, Plan, ReconciledRow, RecordSource, Warning,
};

/// Output of [`reconcile`]: the derived table plus the records it dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reconciliation {
    pub rows: Vec<ReconciledRow>,
    pub warnings: Vec<Warning>,
}

/// An execution whose timestamps have been parsed.
#[derive(Debug, Clone)]
struct ParsedExecution {
    status: ExecutionStatus,
    start: Option<Timestamp>,
    finish: Option<Timestamp>,
}

impl ParsedExecution {
    fn parse(record: &ExecutionRecord) -> Result<Self, Warning> {
        Ok(Self {
            status: record.status.clone(),
            start: parse_timestamp(record, "startTimestamp", record.start_timestamp.as_deref())?,
            finish: parse_timestamp(record, "finishTimestamp", record.finish_timestamp.as_deref())?,
        })
    }
}

/// Reduces the catalog and execution history to one row per plan.
///
/// Pure and deterministic for a given input order: the same inputs always
/// produce the same output. Executions whose plan is not in the catalog are
/// ignored; executions with an unparsable timestamp are dropped with a
/// [`Warning::MalformedRecord`].
///
/// # Examples
///
/// ```rust
/// use planwatch_core::{
///     models::{ExecutionRecord, ExecutionStatus, Plan},
///     reconcile,
/// };
///
/// let plans = vec![Plan::new("A", "Load-EDW", "ENV_PRD")];
/// let executions = vec![
///     ExecutionRecord::finished("A", "execution_successful", "2024-01-01T10:00:00Z"),
///     ExecutionRecord::finished("A", "execution_failed", "2024-01-02T10:00:00Z"),
/// ];
///
/// let result = reconcile(&plans, &executions);
/// assert_eq!(result.rows.len(), 1);
/// assert_eq!(result.rows[0].status, Some(ExecutionStatus::Failed));
/// ```
pub fn reconcile(plans: &[Plan], executions: &[ExecutionRecord]) -> Reconciliation {
    let mut warnings = Vec::new();

    let mut runs_by_plan: HashMap<&str, Vec<&ExecutionRecord>> = HashMap::new();
    for record in executions {
        runs_by_plan
            .entry(record.plan_id.as_str())
            .or_default()
            .push(record);
    }

    let mut latest_by_plan: HashMap<&str, Option<ParsedExecution>> = HashMap::new();
    let mut rows: Vec<ReconciledRow> = Vec::with_capacity(plans.len());
    let mut row_index: HashMap<(&str, &str), usize> = HashMap::new();

    for plan in plans {
        let plan_id = plan.plan_id.as_str();
        let latest = latest_by_plan
            .entry(plan_id)
            .or_insert_with(|| {
                let runs = runs_by_plan.get(plan_id).map(Vec::as_slice).unwrap_or_default();
                latest_execution(runs, &mut warnings)
            })
            .clone();
        let row = build_row(plan, latest);
        let key = (plan.name.as_str(), plan_id);

        // A repeated pair carries the same executions; the later catalog
        // entry replaces the earlier one in place.
        match row_index.get(&key).copied() {
            Some(index) => rows[index] = row,
            None => {
                row_index.insert(key, rows.len());
                rows.push(row);
            }
        }
    }

    let unmatched = runs_by_plan
        .iter()
        .filter(|(plan_id, _)| !latest_by_plan.contains_key(*plan_id))
        .map(|(_, runs)| runs.len())
        .sum::<usize>();
    if unmatched > 0 {
        debug!("Ignored {unmatched} executions of plans missing from the catalog");
    }

    Reconciliation { rows, warnings }
}

/// Picks the execution with the latest finish time, last one on ties.
fn latest_execution(
    runs: &[&ExecutionRecord],
    warnings: &mut Vec<Warning>,
) -> Option<ParsedExecution> {
    let mut latest: Option<ParsedExecution> = None;
    for record in runs {
        let parsed = match ParsedExecution::parse(record) {
            Ok(parsed) => parsed,
            Err(warning) => {
                log::warn!("{warning}");
                warnings.push(warning);
                continue;
            }
        };
        let replaces = match &latest {
            None => true,
            Some(current) => finishes_no_earlier(parsed.finish, current.finish),
        };
        if replaces {
            latest = Some(parsed);
        }
    }
    latest
}

/// Ordering on finish times where a missing finish sorts before any value.
fn finishes_no_earlier(candidate: Option<Timestamp>, current: Option<Timestamp>) -> bool {
    match (candidate, current) {
        (Some(candidate), Some(current)) => candidate >= current,
        (Some(_), None) | (None, None) => true,
        (None, Some(_)) => false,
    }
}

fn build_row(plan: &Plan, latest: Option<ParsedExecution>) -> ReconciledRow {
    let (status, start_timestamp, finish_timestamp) = match latest {
        Some(run) => (Some(run.status), run.start, run.finish),
        None => (None, None, None),
    };
    ReconciledRow {
        plan_id: plan.plan_id.clone(),
        name: plan.name.clone(),
        env: plan.env.clone(),
        status,
        start_timestamp,
        finish_timestamp,
    }
}

/// Parses an RFC 3339 timestamp. Values without an offset are read as UTC.
fn parse_timestamp(
    record: &ExecutionRecord,
    field: &str,
    value: Option<&str>,
) -> Result<Option<Timestamp>, Warning> {
    let Some(value) = value else {
        return Ok(None);
    };

    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(Some(timestamp));
    }
    value
        .parse::<DateTime>()
        .and_then(|civil| civil.to_zoned(TimeZone::UTC))
        .map(|zoned| Some(zoned.timestamp()))
        .map_err(|_| {
            Warning::malformed(
                RecordSource::Executions,
                Some(&record.plan_id),
                format!("unparsable {field} '{value}'"),
            )
        })
}
