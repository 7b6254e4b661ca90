use ferrous_lookup_application::use_cases::ServiceInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub version: String,
    pub date: i64,
    pub kubernetes: bool,
}

impl From<ServiceInfo> for RootResponse {
    fn from(info: ServiceInfo) -> Self {
        Self {
            version: info.version.to_string(),
            date: info.date,
            kubernetes: info.kubernetes,
        }
    }
}
