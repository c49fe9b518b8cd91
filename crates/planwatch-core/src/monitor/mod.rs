//! Refresh cycle orchestration.
//!
//! A [`Monitor`] runs one refresh cycle per call to [`Monitor::refresh`]:
//!
//! ```text
//! ┌─────────────────┐
//! │ Catalog fetch   │───┐
//! └─────────────────┘   │    ┌─────────────┐    ┌──────────────────┐
//!                       ├───▶│  reconcile  │───▶│  StatusSnapshot  │
//! ┌─────────────────┐   │    └─────────────┘    └──────────────────┘
//! │ History fetch   │───┘
//! └─────────────────┘
//! ```
//!
//! The monitor itself holds no state between cycles. Callers that want to
//! keep the last good result across failed refreshes hold a
//! [`StatusCache`].
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Monitor`] instances
//! - [`snapshot`]: The immutable result of one cycle
//! - [`cache`]: Caller-owned holder of the last good snapshot

use jiff::Timestamp;
use log::info;

use crate::{
    api::{ApiClient, Fetched},
    config::MonitorConfig,
    error::Result,
    models::{ExecutionRecord, Plan},
    reconcile::reconcile,
};

pub mod builder;
pub mod cache;
pub mod snapshot;

pub use builder::MonitorBuilder;
pub use cache::StatusCache;
pub use snapshot::StatusSnapshot;

/// Entry point for fetching and reconciling plan statuses.
pub struct Monitor {
    client: ApiClient,
    config: MonitorConfig,
}

impl Monitor {
    fn new(client: ApiClient, config: MonitorConfig) -> Self {
        Self { client, config }
    }

    /// The validated configuration this monitor runs with.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Fetches the plan catalog.
    pub async fn fetch_plans(&self) -> Result<Fetched<Plan>> {
        self.client.fetch_plans().await
    }

    /// Fetches the execution history of the configured window.
    pub async fn fetch_executions(&self) -> Result<Fetched<ExecutionRecord>> {
        self.client.fetch_executions(self.config.window_days).await
    }

    /// Runs a full refresh cycle.
    ///
    /// Both feeds are fetched concurrently, then reconciled. Any fetch error
    /// aborts the cycle; a partial table is never returned.
    pub async fn refresh(&self) -> Result<StatusSnapshot> {
        let (catalog, history) = tokio::try_join!(self.fetch_plans(), self.fetch_executions())?;

        let reconciliation = reconcile(&catalog.items, &history.items);

        let mut warnings = catalog.warnings;
        warnings.extend(history.warnings);
        warnings.extend(reconciliation.warnings);

        info!(
            "Reconciled {} plans against {} executions ({} warnings)",
            catalog.items.len(),
            history.items.len(),
            warnings.len()
        );

        Ok(StatusSnapshot::new(
            reconciliation.rows,
            Timestamp::now(),
            warnings,
        ))
    }
}
