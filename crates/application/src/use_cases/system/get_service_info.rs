use std::sync::Arc;

use crate::ports::RuntimeEnvironment;

#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub version: &'static str,
    /// Unix seconds at the time of the request
    pub date: i64,
    pub kubernetes: bool,
}

pub struct GetServiceInfoUseCase {
    version: &'static str,
    environment: Arc<dyn RuntimeEnvironment>,
}

impl GetServiceInfoUseCase {
    pub fn new(version: &'static str, environment: Arc<dyn RuntimeEnvironment>) -> Self {
        Self {
            version,
            environment,
        }
    }

    pub fn execute(&self) -> ServiceInfo {
        ServiceInfo {
            version: self.version,
            date: chrono::Utc::now().timestamp(),
            kubernetes: self.environment.in_kubernetes(),
        }
    }
}
