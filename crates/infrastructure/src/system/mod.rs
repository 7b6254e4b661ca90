pub mod service_account_probe;

pub use service_account_probe::ServiceAccountProbe;
