use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::history::HistoryConfig;
use super::logging::LoggingConfig;
use super::lookup::LookupConfig;
use super::server::ServerConfig;
use super::store::StoreConfig;

const DEFAULT_CONFIG_FILE: &str = "ferrous-lookup.toml";

/// Main configuration structure for Ferrous Lookup
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Redis connection for the query history
    #[serde(default)]
    pub store: StoreConfig,

    /// Query history list settings
    #[serde(default)]
    pub history: HistoryConfig,

    /// Forward lookup settings
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration once at startup
    ///
    /// Priority order (later wins):
    /// 1. Defaults
    /// 2. Explicit path, or ferrous-lookup.toml in the current directory
    /// 3. Process environment (REDIS_*, MAX_QUERY_HISTORY)
    /// 4. Command-line overrides
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_env(|name| std::env::var(name).ok())?;
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Empty variables are treated as unset. A malformed REDIS_PORT or
    /// REDIS_DB is an error; a malformed MAX_QUERY_HISTORY keeps the
    /// current value.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let Some(host) = var("REDIS_HOST") {
            self.store.host = host;
        }
        if let Some(port) = var("REDIS_PORT") {
            self.store.port = port
                .parse()
                .map_err(|e| ConfigError::InvalidEnv("REDIS_PORT", format!("{port}: {e}")))?;
        }
        if let Some(password) = var("REDIS_PASSWORD") {
            self.store.password = password;
        }
        if let Some(db) = var("REDIS_DB") {
            self.store.db = db
                .parse()
                .map_err(|e| ConfigError::InvalidEnv("REDIS_DB", format!("{db}: {e}")))?;
        }
        if let Some(max) = var("MAX_QUERY_HISTORY") {
            if let Ok(n) = max.parse() {
                self.history.max_query_history = n;
            }
        }
        Ok(())
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.host.is_empty() {
            return Err(ConfigError::Validation(
                "Redis host cannot be empty".to_string(),
            ));
        }
        if self.history.key.is_empty() {
            return Err(ConfigError::Validation(
                "History key cannot be empty".to_string(),
            ));
        }
        if self.history.timeout_ms == 0
            || self.lookup.timeout_ms == 0
            || self.store.connect_timeout_ms == 0
        {
            return Err(ConfigError::Validation(
                "Timeouts must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
