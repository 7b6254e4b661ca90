mod lookup_domain;
mod validate_ip;

pub use lookup_domain::LookupDomainUseCase;
pub use validate_ip::ValidateIpUseCase;
