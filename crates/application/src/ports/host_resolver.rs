use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Forward lookup of `domain`, returning addresses of both families
    /// in resolver order. Failures map to `DomainError::ResolutionFailed`.
    async fn lookup_ip(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError>;
}
