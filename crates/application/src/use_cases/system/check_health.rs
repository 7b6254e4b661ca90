use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::services::QueryHistoryService;

pub struct CheckHealthUseCase {
    history: Arc<QueryHistoryService>,
}

impl CheckHealthUseCase {
    pub fn new(history: Arc<QueryHistoryService>) -> Self {
        Self { history }
    }

    /// Pings the history store. Lookups keep working when it is down,
    /// so this only reports.
    #[instrument(skip(self))]
    pub async fn store_reachable(&self) -> bool {
        match self.history.ping().await {
            Ok(()) => {
                info!("Query history store reachable");
                true
            }
            Err(e) => {
                warn!(error = %e, "Query history store unreachable");
                false
            }
        }
    }
}
