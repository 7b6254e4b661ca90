use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_QUERY_HISTORY: u32 = 20;

/// Query history settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Name of the Redis list holding serialized queries (default: "queries")
    #[serde(default = "default_key")]
    pub key: String,

    /// Entries returned by the history endpoint (default: 20, env: MAX_QUERY_HISTORY).
    /// The list itself is never trimmed.
    #[serde(default = "default_max_query_history")]
    pub max_query_history: u32,

    /// Upper bound for a single store round trip in milliseconds (default: 2000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            max_query_history: DEFAULT_MAX_QUERY_HISTORY,
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_key() -> String {
    "queries".to_string()
}

fn default_max_query_history() -> u32 {
    DEFAULT_MAX_QUERY_HISTORY
}

fn default_timeout_ms() -> u64 {
    2000
}
