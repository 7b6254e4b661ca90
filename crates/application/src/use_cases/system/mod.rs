mod check_health;
mod get_service_info;

pub use check_health::CheckHealthUseCase;
pub use get_service_info::{GetServiceInfoUseCase, ServiceInfo};
