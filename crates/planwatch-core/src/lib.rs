//! Core library for the Planwatch plan status monitor.
//!
//! This crate fetches the plan catalog and execution history of a remote
//! orchestration platform, reconciles them into one current status per plan,
//! and projects that table onto a single deployment environment for display.
//!
//! # Pipeline
//!
//! - **Fetching** ([`api`]): the catalog in one request, the execution history
//!   page by page until an empty page, both with timeouts and retries
//! - **Reconciliation** ([`reconcile()`]): left join on plan id, latest
//!   finish time per `(name, plan_id)`
//! - **Projection** ([`project_for_environment`]): `(name, status)` pairs of
//!   one environment, the only thing a display needs
//! - **Orchestration** ([`monitor`]): one refresh cycle per call, plus a
//!   caller-owned [`StatusCache`] that survives failed refreshes
//!
//! Fetch failures abort a refresh as a whole. Individual malformed records
//! are dropped and reported as [`Warning`]s instead.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use planwatch_core::{display::StatusTable, MonitorBuilder, MonitorConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let monitor = MonitorBuilder::new()
//!     .with_config(MonitorConfig::default())
//!     .with_api_token("token")
//!     .build()?;
//!
//! let snapshot = monitor.refresh().await?;
//! let projection = snapshot.project(&monitor.config().target_environment);
//! println!("{}", StatusTable(&projection));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod monitor;
pub mod projection;
pub mod reconcile;

// Re-export commonly used types
pub use api::{ApiClient, Fetched};
pub use config::MonitorConfig;
pub use display::{LocalDateTime, OperationStatus, PlanTable, RefreshedAgo, StatusTable, WarningSummary};
pub use error::{MonitorError, Result};
pub use models::{
    ExecutionRecord, ExecutionStatus, Plan, ReconciledRow, RecordSource, StatusEntry, Warning,
};
pub use monitor::{Monitor, MonitorBuilder, StatusCache, StatusSnapshot};
pub use projection::{project_for_environment, Projection};
pub use reconcile::{reconcile, Reconciliation};
