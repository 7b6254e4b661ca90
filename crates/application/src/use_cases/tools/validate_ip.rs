use ferrous_lookup_domain::validators::is_valid_ip;
use tracing::debug;

#[derive(Default)]
pub struct ValidateIpUseCase;

impl ValidateIpUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, candidate: &str) -> bool {
        let valid = is_valid_ip(candidate);
        debug!(candidate, valid, "IP validation");
        valid
    }
}
