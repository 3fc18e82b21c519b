//! Dashboard counters.

use crate::error::ConsoleResult;
use memoraid_client::AdminApi;
use memoraid_types::AdminStats;
use std::sync::Arc;

pub struct DashboardView<A> {
    api: Arc<A>,
    stats: Option<AdminStats>,
    loading: bool,
}

impl<A: AdminApi> DashboardView<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            stats: None,
            loading: true,
        }
    }

    pub async fn refresh(&mut self) -> ConsoleResult<()> {
        let result = self.api.stats().await;
        self.loading = false;
        match result {
            Ok(stats) => {
                self.stats = Some(stats);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching stats");
                Err(err.into())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// `None` until the first successful fetch.
    pub fn stats(&self) -> Option<&AdminStats> {
        self.stats.as_ref()
    }
}
