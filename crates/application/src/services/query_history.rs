use ferrous_lookup_domain::config::HistoryConfig;
use ferrous_lookup_domain::{DomainError, Query};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::ports::ListStore;

/// Persists lookups as JSON entries of a single list, newest first.
///
/// The list is never trimmed; `max_query_history` only bounds reads.
pub struct QueryHistoryService {
    store: Arc<dyn ListStore>,
    key: Arc<str>,
    max_query_history: u32,
    timeout: Duration,
}

impl QueryHistoryService {
    pub fn new(store: Arc<dyn ListStore>, config: &HistoryConfig) -> Self {
        Self {
            store,
            key: Arc::from(config.key.as_str()),
            max_query_history: config.max_query_history,
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }

    pub fn configured_limit(&self) -> u32 {
        self.max_query_history
    }

    /// Best effort: failures are logged and the entry is dropped.
    #[instrument(skip(self, query), fields(domain = %query.domain()))]
    pub async fn record(&self, query: &Query) {
        let encoded = match serde_json::to_string(query) {
            Ok(encoded) => encoded,
            Err(e) => {
                error!(error = %e, "Failed to serialize query, dropping history entry");
                return;
            }
        };

        match self
            .bounded("push", self.store.push_front(&self.key, encoded))
            .await
        {
            Ok(()) => debug!(key = %self.key, "Query recorded"),
            Err(e) => warn!(error = %e, key = %self.key, "Failed to record query"),
        }
    }

    /// Newest-first listing of at most `limit` entries. Entries that fail
    /// to decode are skipped.
    #[instrument(skip(self))]
    pub async fn list(&self, limit: u32) -> Result<Vec<Query>, DomainError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let raw = self
            .bounded("read", self.store.read_front(&self.key, limit as usize))
            .await
            .inspect_err(|e| error!(error = %e, key = %self.key, "Failed to read query history"))?;

        let total = raw.len();
        let queries: Vec<Query> = raw
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_str::<Query>(entry) {
                Ok(query) => Some(query),
                Err(e) => {
                    let failure = DomainError::SerializationFailure(e.to_string());
                    warn!(index, error = %failure, "Skipping corrupt history entry");
                    None
                }
            })
            .collect();

        debug!(
            requested = limit,
            fetched = total,
            returned = queries.len(),
            "Query history loaded"
        );

        Ok(queries)
    }

    /// Listing bounded by the configured retention
    pub async fn list_recent(&self) -> Result<Vec<Query>, DomainError> {
        self.list(self.max_query_history).await
    }

    pub async fn ping(&self) -> Result<(), DomainError> {
        self.bounded("ping", self.store.ping()).await
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>>,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .unwrap_or_else(|_| {
                Err(DomainError::StoreUnavailable(format!(
                    "{} timed out after {}ms",
                    operation,
                    self.timeout.as_millis()
                )))
            })
    }
}
