//! Ferrous Lookup Domain Layer
pub mod config;
pub mod errors;
pub mod query;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use query::{Address, Query};
