use ferrous_lookup_application::ports::RuntimeEnvironment;
use std::path::PathBuf;

pub const SERVICE_ACCOUNT_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount";

/// Detects Kubernetes by the mounted service account directory.
pub struct ServiceAccountProbe {
    path: PathBuf,
}

impl ServiceAccountProbe {
    pub fn new() -> Self {
        Self::with_path(SERVICE_ACCOUNT_PATH)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for ServiceAccountProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeEnvironment for ServiceAccountProbe {
    fn in_kubernetes(&self) -> bool {
        self.path.exists()
    }
}
