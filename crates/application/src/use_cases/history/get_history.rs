use ferrous_lookup_domain::{DomainError, Query};
use std::sync::Arc;

use crate::services::QueryHistoryService;

pub struct GetQueryHistoryUseCase {
    history: Arc<QueryHistoryService>,
}

impl GetQueryHistoryUseCase {
    pub fn new(history: Arc<QueryHistoryService>) -> Self {
        Self { history }
    }

    pub async fn execute(&self) -> Result<Vec<Query>, DomainError> {
        self.history.list_recent().await
    }

    pub async fn execute_with_limit(&self, limit: u32) -> Result<Vec<Query>, DomainError> {
        self.history.list(limit.min(self.history.configured_limit())).await
    }
}
