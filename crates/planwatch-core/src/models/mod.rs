//! Data models for plans, executions and reconciled rows.
//!
//! [`Plan`] and [`ExecutionRecord`] mirror what the remote platform reports
//! and live only for one refresh cycle. [`ReconciledRow`] is the derived
//! table built by [`crate::reconcile`], and [`StatusEntry`] is the projection
//! handed to whatever displays the result. Display implementations live in
//! [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use planwatch_core::models::{ExecutionRecord, ExecutionStatus, Plan};
//!
//! let plan = Plan::new("A", "Load-EDW", "ENV_PRD");
//! let run = ExecutionRecord::finished("A", "execution_failed", "2024-01-02T10:00:00Z");
//!
//! assert_eq!(run.plan_id, plan.plan_id);
//! assert_eq!(run.status, ExecutionStatus::Failed);
//! ```

pub mod execution;
pub mod plan;
pub mod reconciled;
pub mod status;
pub mod warning;


pub use execution::ExecutionRecord;
pub use plan::Plan;
pub use reconciled::{ReconciledRow, StatusEntry};
pub use status::ExecutionStatus;
pub use warning::{RecordSource, Warning};
