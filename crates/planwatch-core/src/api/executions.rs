//! Paginated execution history retrieval.

use log::{debug, info};

use super::{
    wire::{decode_items, ExecutionItem},
    Fetched, EXECUTIONS_ENDPOINT,
};
use crate::{
    error::{MonitorError, Result},
    models::{ExecutionRecord, RecordSource},
};

impl super::ApiClient {
    /// Fetches all executions of the trailing `window_days` days.
    ///
    /// Pages of `page_size` items are requested at increasing offsets, one
    /// at a time, until a page comes back empty. No total count is assumed.
    /// At most `max_pages` requests are made, the final empty page included.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::PaginationExhausted` when the cap is reached
    /// without an empty page, and any fetch error of an individual page.
    pub async fn fetch_executions(&self, window_days: u32) -> Result<Fetched<ExecutionRecord>> {
        let mut fetched = Fetched::default();
        let mut offset: u64 = 0;

        for page in 1..=self.max_pages {
            let query = [
                ("limit", self.page_size.to_string()),
                ("offset", offset.to_string()),
                ("lastDays", window_days.to_string()),
            ];
            let items = self
                .get_envelope(EXECUTIONS_ENDPOINT, &query)
                .await?
                .items
                .unwrap_or_default();

            if items.is_empty() {
                info!(
                    "Retrieved {} executions over {} pages ({} skipped)",
                    fetched.items.len(),
                    page,
                    fetched.warnings.len()
                );
                return Ok(fetched);
            }

            debug!("Page {page} at offset {offset} returned {} items", items.len());
            fetched.extend(decode_items(
                items,
                RecordSource::Executions,
                ExecutionItem::into_record,
            ));
            offset += u64::from(self.page_size);
        }

        Err(MonitorError::PaginationExhausted {
            endpoint: EXECUTIONS_ENDPOINT.to_string(),
            max_pages: self.max_pages,
        })
    }
}
