//! Configuration module for Ferrous Lookup
//!
//! Structures are grouped by concern:
//! - `root`: main configuration, file/env/CLI layering
//! - `server`: HTTP bind address and port
//! - `store`: Redis connection settings
//! - `history`: query history list and retention bound
//! - `lookup`: forward lookup settings
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod history;
pub mod logging;
pub mod lookup;
pub mod root;
pub mod server;
pub mod store;

pub use errors::ConfigError;
pub use history::HistoryConfig;
pub use logging::LoggingConfig;
pub use lookup::LookupConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use store::StoreConfig;
