use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;

/// Ordered list storage (Redis lists in production).
///
/// Implementations report connectivity problems as
/// `DomainError::StoreUnavailable`.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Prepend `value` to the list at `key`, creating it if needed.
    async fn push_front(&self, key: &str, value: String) -> Result<(), DomainError>;

    /// Read up to `count` entries starting at the front of the list.
    async fn read_front(&self, key: &str, count: usize) -> Result<Vec<String>, DomainError>;

    /// Round trip to the backend.
    async fn ping(&self) -> Result<(), DomainError>;
}
