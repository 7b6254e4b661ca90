use serde::{Deserialize, Serialize};

/// Redis connection settings for the query history store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Redis host (default: "localhost", env: REDIS_HOST)
    #[serde(default = "default_host")]
    pub host: String,

    /// Redis port (default: 6379, env: REDIS_PORT)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Redis password, empty for no auth (env: REDIS_PASSWORD)
    #[serde(default)]
    pub password: String,

    /// Logical database index (default: 0, env: REDIS_DB)
    #[serde(default)]
    pub db: i64,

    /// Connect timeout in milliseconds (default: 500). A refused or
    /// unreachable server fails within this bound instead of retrying.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl StoreConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            password: String::new(),
            db: 0,
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    6379
}

fn default_connect_timeout_ms() -> u64 {
    500
}
