use async_trait::async_trait;
use ferrous_lookup_application::ports::HostResolver;
use ferrous_lookup_domain::DomainError;
use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use std::net::IpAddr;
use tracing::{debug, info, instrument, warn};

/// Forward resolver using the host's resolv.conf.
pub struct HickoryHostResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryHostResolver {
    /// Falls back to the library's default upstreams when the system
    /// configuration cannot be read.
    pub fn from_system_conf() -> Self {
        let (config, opts) = match hickory_resolver::system_conf::read_system_conf() {
            Ok(conf) => {
                info!("Resolver using system configuration");
                conf
            }
            Err(e) => {
                warn!(error = %e, "System resolver configuration unavailable, using defaults");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };
        Self::new(config, opts)
    }

    pub fn new(config: ResolverConfig, mut opts: ResolverOpts) -> Self {
        // Both families, in answer order; IPv6 is filtered further up.
        opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

#[async_trait]
impl HostResolver for HickoryHostResolver {
    #[instrument(skip(self))]
    async fn lookup_ip(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        let lookup = self
            .resolver
            .lookup_ip(domain)
            .await
            .map_err(|e| DomainError::resolution_failed(domain, e))?;

        let addresses: Vec<IpAddr> = lookup.iter().collect();
        debug!(count = addresses.len(), "Forward lookup answered");
        Ok(addresses)
    }
}
