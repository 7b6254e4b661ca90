use ferrous_lookup_application::use_cases::{
    GetQueryHistoryUseCase, GetServiceInfoUseCase, LookupDomainUseCase, ValidateIpUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup_domain: Arc<LookupDomainUseCase>,
    pub validate_ip: Arc<ValidateIpUseCase>,
    pub get_history: Arc<GetQueryHistoryUseCase>,
    pub get_service_info: Arc<GetServiceInfoUseCase>,
}
