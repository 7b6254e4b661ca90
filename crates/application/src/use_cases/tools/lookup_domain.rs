use ferrous_lookup_domain::validators::validate_domain;
use ferrous_lookup_domain::{Address, DomainError, Query};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::ports::HostResolver;
use crate::services::QueryHistoryService;

pub struct LookupDomainUseCase {
    resolver: Arc<dyn HostResolver>,
    history: Arc<QueryHistoryService>,
    timeout: Duration,
}

impl LookupDomainUseCase {
    pub fn new(
        resolver: Arc<dyn HostResolver>,
        history: Arc<QueryHistoryService>,
        timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            history,
            timeout,
        }
    }

    /// Resolve `domain`, keep its IPv4 answers and record the lookup.
    ///
    /// Nothing is recorded when the domain is empty or resolution fails.
    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str, client_ip: &str) -> Result<Query, DomainError> {
        validate_domain(domain).map_err(DomainError::InvalidArgument)?;

        let resolved = tokio::time::timeout(self.timeout, self.resolver.lookup_ip(domain))
            .await
            .unwrap_or_else(|_| {
                Err(DomainError::resolution_failed(
                    domain,
                    format!("timed out after {}ms", self.timeout.as_millis()),
                ))
            })
            .inspect_err(|e| warn!(error = %e, "Lookup failed"))?;

        let total = resolved.len();
        let addresses: Vec<Address> = resolved.into_iter().filter_map(Address::from_ip).collect();
        debug!(resolved = total, ipv4 = addresses.len(), "Lookup answered");

        let query = Query::new(
            domain,
            client_ip,
            addresses,
            chrono::Utc::now().timestamp(),
        );

        self.history.record(&query).await;

        info!(
            domain = %query.domain(),
            client_ip = %query.client_ip(),
            addresses = query.addresses().len(),
            "Lookup completed"
        );

        Ok(query)
    }
}
