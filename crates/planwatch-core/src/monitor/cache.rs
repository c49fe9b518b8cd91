//! Caller-owned holder of the last good snapshot.

use jiff::{SignedDuration, Timestamp};
use log::warn;

use super::{Monitor, StatusSnapshot};
use crate::error::Result;

/// Keeps the most recent successful snapshot across refreshes.
///
/// The cache only changes on an explicit [`StatusCache::refresh`] that
/// succeeds. A failed refresh leaves the previous snapshot in place so the
/// caller can keep showing stale but consistent data.
#[derive(Debug, Clone, Default)]
pub struct StatusCache {
    snapshot: Option<StatusSnapshot>,
}

impl StatusCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a refresh cycle and stores its snapshot on success.
    ///
    /// # Errors
    ///
    /// Returns the refresh error unchanged; the cached snapshot is untouched.
    pub async fn refresh(&mut self, monitor: &Monitor) -> Result<&StatusSnapshot> {
        match monitor.refresh().await {
            Ok(snapshot) => Ok(self.store(snapshot)),
            Err(e) => {
                if self.snapshot.is_some() {
                    warn!("Refresh failed, keeping previous snapshot: {e}");
                }
                Err(e)
            }
        }
    }

    /// Replaces the cached snapshot.
    pub fn store(&mut self, snapshot: StatusSnapshot) -> &StatusSnapshot {
        self.snapshot.insert(snapshot)
    }

    /// The last good snapshot, if any refresh succeeded yet.
    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        self.snapshot.as_ref()
    }

    /// When the cached snapshot was fetched.
    pub fn fetched_at(&self) -> Option<Timestamp> {
        self.snapshot.as_ref().map(StatusSnapshot::fetched_at)
    }

    /// Age of the cached snapshot at `now`.
    pub fn age(&self, now: Timestamp) -> Option<SignedDuration> {
        self.snapshot.as_ref().map(|s| s.age(now))
    }
}
