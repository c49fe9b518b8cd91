//! Command handlers
//!
//! Each handler drives the core [`Monitor`] and hands the rendered markdown
//! to the [`TerminalRenderer`]. Tables go to stdout; warnings and refresh
//! failures go to stderr.

use std::time::Duration;

use anyhow::{Context, Result};
use jiff::Timestamp;
use log::{info, warn};
use planwatch_core::{
    LocalDateTime, Monitor, OperationStatus, PlanTable, RefreshedAgo, StatusCache,
    StatusSnapshot, StatusTable, WarningSummary,
};

use crate::renderer::TerminalRenderer;

pub struct Cli {
    monitor: Monitor,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(monitor: Monitor, renderer: TerminalRenderer) -> Self {
        Self { monitor, renderer }
    }

    /// Refresh once and render the status table of the target environment.
    pub async fn status(&self) -> Result<()> {
        let snapshot = self
            .monitor
            .refresh()
            .await
            .context("Failed to refresh plan statuses")?;

        let caption = format!("Fetched at {}", LocalDateTime(&snapshot.fetched_at()));
        self.render_snapshot(&snapshot, &caption)
    }

    /// Render the plan catalog.
    pub async fn plans(&self) -> Result<()> {
        let fetched = self
            .monitor
            .fetch_plans()
            .await
            .context("Failed to fetch plan catalog")?;

        self.renderer.render(&PlanTable(&fetched.items).to_string())?;
        self.renderer
            .render_diagnostic(&WarningSummary(&fetched.warnings).to_string())
    }

    /// Refresh every `interval` until Ctrl-C.
    ///
    /// A failed refresh is reported and the previous table is shown again
    /// with its age, so stale data is visible as such. Ctrl-C is honoured
    /// while a refresh is in flight as well as between refreshes.
    pub async fn watch(&self, interval: Duration) -> Result<()> {
        let mut cache = StatusCache::new();
        info!("Watching plan statuses every {}s", interval.as_secs());

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            let refreshed = tokio::select! {
                result = cache.refresh(&self.monitor) => result.map(|snapshot| snapshot.rows().len()),
                result = &mut shutdown => return stop_watch(result),
            };

            match refreshed {
                Ok(plans) => self.renderer.render_diagnostic(
                    &OperationStatus::success(format!("Refreshed {plans} plans")).to_string(),
                )?,
                Err(e) => {
                    warn!("Refresh failed: {e}");
                    self.renderer.render_diagnostic(
                        &OperationStatus::failure(format!("Refresh failed: {e}")).to_string(),
                    )?;
                }
            }

            if let Some(snapshot) = cache.snapshot() {
                let caption = RefreshedAgo(snapshot.age(Timestamp::now())).to_string();
                self.render_snapshot(snapshot, &caption)?;
            }

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                result = &mut shutdown => return stop_watch(result),
            }
        }
    }

    fn render_snapshot(&self, snapshot: &StatusSnapshot, caption: &str) -> Result<()> {
        let projection = snapshot.project(&self.monitor.config().target_environment);

        let mut output = StatusTable(&projection).to_string();
        output.push('\n');
        output.push_str(&format!("*{caption}*\n"));
        self.renderer.render(&output)?;

        // The empty-result notice is already part of the table
        self.renderer
            .render_diagnostic(&WarningSummary(snapshot.warnings()).to_string())
    }
}

fn stop_watch(signal: std::io::Result<()>) -> Result<()> {
    signal.context("Failed to listen for Ctrl-C")?;
    info!("Stopping watch");
    Ok(())
}
