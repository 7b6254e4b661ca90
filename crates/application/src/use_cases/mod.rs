pub mod history;
pub mod system;
pub mod tools;

// Re-export use cases
pub use history::GetQueryHistoryUseCase;
pub use system::{CheckHealthUseCase, GetServiceInfoUseCase, ServiceInfo};
pub use tools::{LookupDomainUseCase, ValidateIpUseCase};
