use ferrous_lookup_application::ports::{HostResolver, ListStore, RuntimeEnvironment};
use ferrous_lookup_application::services::QueryHistoryService;
use ferrous_lookup_domain::Config;
use ferrous_lookup_infrastructure::dns::HickoryHostResolver;
use ferrous_lookup_infrastructure::repositories::RedisListStore;
use ferrous_lookup_infrastructure::system::ServiceAccountProbe;
use std::sync::Arc;
use tracing::info;

/// Adapters behind the application ports.
pub struct Services {
    pub history: Arc<QueryHistoryService>,
    pub resolver: Arc<dyn HostResolver>,
    pub environment: Arc<dyn RuntimeEnvironment>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let store: Arc<dyn ListStore> = Arc::new(RedisListStore::new(&config.store)?);
        let history = Arc::new(QueryHistoryService::new(store, &config.history));

        let resolver: Arc<dyn HostResolver> = Arc::new(HickoryHostResolver::from_system_conf());
        let environment: Arc<dyn RuntimeEnvironment> = Arc::new(ServiceAccountProbe::new());

        info!(
            kubernetes = environment.in_kubernetes(),
            "Services initialized"
        );

        Ok(Self {
            history,
            resolver,
            environment,
        })
    }
}
