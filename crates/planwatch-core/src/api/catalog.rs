//! Plan catalog retrieval.

use log::{debug, info};

use super::{
    wire::{decode_items, PlanItem},
    Fetched, PLANS_ENDPOINT,
};
use crate::{
    error::{MonitorError, Result},
    models::{Plan, RecordSource},
};

impl super::ApiClient {
    /// Fetches every plan in the catalog with its environment.
    ///
    /// The catalog is a single page. Items that cannot be turned into a
    /// [`Plan`] are dropped and reported in [`Fetched::warnings`].
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::RemoteFetch` for a non-2xx response (never an
    /// empty catalog), `MonitorError::Transport` when the request cannot be
    /// completed, and `MonitorError::Decode` when the envelope is unusable.
    pub async fn fetch_plans(&self) -> Result<Fetched<Plan>> {
        debug!("Fetching plan catalog");

        let items = self
            .get_envelope(PLANS_ENDPOINT, &[])
            .await?
            .items
            .ok_or_else(|| MonitorError::decode(PLANS_ENDPOINT, "envelope has no 'items' list"))?;

        let fetched = decode_items(items, RecordSource::Catalog, PlanItem::into_plan);
        info!(
            "Retrieved {} plans ({} skipped)",
            fetched.items.len(),
            fetched.warnings.len()
        );
        Ok(fetched)
    }
}
