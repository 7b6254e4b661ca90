mod host_resolver;
mod list_store;
mod runtime_environment;

pub use host_resolver::HostResolver;
pub use list_store::ListStore;
pub use runtime_environment::RuntimeEnvironment;
