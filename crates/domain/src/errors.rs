use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Unable to find IP addresses for domain: {domain} ({reason})")]
    ResolutionFailed { domain: String, reason: String },

    #[error("Query store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Query record serialization failed: {0}")]
    SerializationFailure(String),
}

impl DomainError {
    pub fn resolution_failed(domain: impl Into<String>, reason: impl ToString) -> Self {
        DomainError::ResolutionFailed {
            domain: domain.into(),
            reason: reason.to_string(),
        }
    }
}
