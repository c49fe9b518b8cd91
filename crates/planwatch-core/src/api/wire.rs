//! Wire shapes of the API items and their conversion into domain models.
//!
//! Every field is optional at this level so that one item of an unexpected
//! shape only costs that item. Conversion returns a [`Warning`] for items
//! that lack something the domain model requires.

use serde::{de::DeserializeOwned, Deserialize};

use super::Fetched;
use crate::models::{ExecutionRecord, Plan, RecordSource, Warning};

/// One item of the plan catalog envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanItem {
    /// Plan identifier
    pub executable: Option<String>,
    pub name: Option<String>,
    pub workspace: Option<Workspace>,
}

/// Workspace a plan is registered in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Workspace {
    pub environment: Option<EnvironmentRef>,
}

/// Environment a workspace belongs to.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentRef {
    pub name: Option<String>,
}

/// One item of the execution history envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionItem {
    pub plan_id: Option<String>,
    pub status: Option<String>,
    pub start_timestamp: Option<String>,
    pub finish_timestamp: Option<String>,
}

/// Flattens `workspace.environment.name` into the plan's environment.
///
/// # Examples
///
/// ```rust
/// use planwatch_core::api::wire::{extract_environment, PlanItem};
///
/// let item: PlanItem = serde_json::from_str(
///     r#"{"executable": "A", "name": "Load-EDW",
///         "workspace": {"environment": {"name": "ENV_PRD"}}}"#,
/// )
/// .unwrap();
/// assert_eq!(extract_environment(&item).unwrap(), "ENV_PRD");
///
/// let orphan: PlanItem = serde_json::from_str(r#"{"executable": "B", "workspace": {}}"#).unwrap();
/// assert!(extract_environment(&orphan).is_err());
/// ```
pub fn extract_environment(item: &PlanItem) -> Result<String, Warning> {
    let plan_id = item.executable.as_deref();
    let workspace = item
        .workspace
        .as_ref()
        .ok_or_else(|| Warning::malformed(RecordSource::Catalog, plan_id, "missing workspace"))?;
    let environment = workspace.environment.as_ref().ok_or_else(|| {
        Warning::malformed(RecordSource::Catalog, plan_id, "missing workspace.environment")
    })?;
    non_empty(environment.name.as_deref()).map(str::to_string).ok_or_else(|| {
        Warning::malformed(
            RecordSource::Catalog,
            plan_id,
            "missing workspace.environment.name",
        )
    })
}

impl PlanItem {
    /// Converts into a catalog entry, or explains why it cannot be used.
    pub fn into_plan(self) -> Result<Plan, Warning> {
        let env = extract_environment(&self)?;
        let plan_id = non_empty(self.executable.as_deref())
            .ok_or_else(|| Warning::malformed(RecordSource::Catalog, None, "missing executable"))?;
        let name = non_empty(self.name.as_deref()).ok_or_else(|| {
            Warning::malformed(RecordSource::Catalog, Some(plan_id), "missing name")
        })?;
        Ok(Plan::new(plan_id, name, env))
    }
}

impl ExecutionItem {
    /// Converts into an execution record, or explains why it cannot be used.
    ///
    /// Timestamps are not parsed here; an empty string is treated as absent.
    pub fn into_record(self) -> Result<ExecutionRecord, Warning> {
        let plan_id = non_empty(self.plan_id.as_deref())
            .ok_or_else(|| Warning::malformed(RecordSource::Executions, None, "missing planId"))?;
        let status = non_empty(self.status.as_deref()).ok_or_else(|| {
            Warning::malformed(RecordSource::Executions, Some(plan_id), "missing status")
        })?;
        Ok(ExecutionRecord {
            plan_id: plan_id.to_string(),
            status: status.into(),
            start_timestamp: non_empty(self.start_timestamp.as_deref()).map(str::to_string),
            finish_timestamp: non_empty(self.finish_timestamp.as_deref()).map(str::to_string),
        })
    }
}

/// Decodes raw envelope items one by one, dropping the ones that fail.
pub(crate) fn decode_items<W, T>(
    values: Vec<serde_json::Value>,
    source: RecordSource,
    convert: impl Fn(W) -> Result<T, Warning>,
) -> Fetched<T>
where
    W: DeserializeOwned,
{
    let mut fetched = Fetched::default();
    for value in values {
        let converted = serde_json::from_value::<W>(value)
            .map_err(|e| Warning::malformed(source, None, format!("undecodable item: {e}")))
            .and_then(&convert);
        match converted {
            Ok(item) => fetched.items.push(item),
            Err(warning) => {
                log::warn!("{warning}");
                fetched.warnings.push(warning);
            }
        }
    }
    fetched
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
