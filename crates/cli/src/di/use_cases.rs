use ferrous_lookup_api::AppState;
use ferrous_lookup_application::use_cases::{
    CheckHealthUseCase, GetQueryHistoryUseCase, GetServiceInfoUseCase, LookupDomainUseCase,
    ValidateIpUseCase,
};
use ferrous_lookup_domain::Config;
use std::sync::Arc;
use std::time::Duration;

use super::Services;

pub struct UseCases {
    pub lookup_domain: Arc<LookupDomainUseCase>,
    pub validate_ip: Arc<ValidateIpUseCase>,
    pub get_history: Arc<GetQueryHistoryUseCase>,
    pub get_service_info: Arc<GetServiceInfoUseCase>,
    pub check_health: Arc<CheckHealthUseCase>,
}

impl UseCases {
    pub fn new(services: &Services, config: &Config, version: &'static str) -> Self {
        Self {
            lookup_domain: Arc::new(LookupDomainUseCase::new(
                services.resolver.clone(),
                services.history.clone(),
                Duration::from_millis(config.lookup.timeout_ms),
            )),
            validate_ip: Arc::new(ValidateIpUseCase::new()),
            get_history: Arc::new(GetQueryHistoryUseCase::new(services.history.clone())),
            get_service_info: Arc::new(GetServiceInfoUseCase::new(
                version,
                services.environment.clone(),
            )),
            check_health: Arc::new(CheckHealthUseCase::new(services.history.clone())),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            lookup_domain: self.lookup_domain.clone(),
            validate_ip: self.validate_ip.clone(),
            get_history: self.get_history.clone(),
            get_service_info: self.get_service_info.clone(),
        }
    }
}
