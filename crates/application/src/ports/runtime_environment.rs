pub trait RuntimeEnvironment: Send + Sync {
    /// Whether the process runs inside a Kubernetes pod
    fn in_kubernetes(&self) -> bool;
}
