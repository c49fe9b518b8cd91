//! Display wrapper types for formatting refresh results.
//!
//! The core never renders anything itself. These wrappers implement
//! [`std::fmt::Display`] over domain data and produce markdown, which an
//! interface can print as-is or hand to a terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Projection,   │    │ Display Wrapper │    │    Markdown     │
//! │  Plans, Warnings│───▶│     Types       │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Wrapper Types
//!
//! - [`StatusTable`]: Latest status per plan for one environment
//! - [`PlanTable`]: The plan catalog with environments
//! - [`WarningSummary`]: Dropped records and empty results
//! - [`RefreshedAgo`]: "Last refreshed N min M sec ago" caption
//! - [`LocalDateTime`]: Timestamp in the system timezone
//! - [`OperationStatus`]: Success/failure messages
//!
//! ## Usage Examples
//!
//! ```rust
//! use planwatch_core::{
//!     display::StatusTable,
//!     models::{ExecutionRecord, Plan},
//!     projection::Projection,
//!     reconcile,
//! };
//!
//! let plans = vec![Plan::new("A", "Load-EDW", "ENV_PRD")];
//! let executions = vec![ExecutionRecord::finished(
//!     "A",
//!     "execution_failed",
//!     "2024-01-02T10:00:00Z",
//! )];
//! let result = reconcile(&plans, &executions);
//! let projection = Projection::build(&result.rows, "ENV_PRD", &result.warnings);
//!
//! let output = StatusTable(&projection).to_string();
//! assert!(output.contains("| Load-EDW | ✗ execution_failed |"));
//! ```

pub mod datetime;
pub mod status;
pub mod tables;
pub mod warnings;

// Re-export commonly used types for convenience
pub use datetime::{LocalDateTime, RefreshedAgo};
pub use status::OperationStatus;
pub use tables::{PlanTable, StatusTable};
pub use warnings::WarningSummary;

/// Escapes characters that would break a markdown table cell.
pub(crate) fn table_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}
