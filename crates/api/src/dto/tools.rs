use serde::{Deserialize, Serialize};

/// Request DTO for IP validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateIpRequest {
    #[serde(default)]
    pub ip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateIpResponse {
    pub status: bool,
}
