#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid {0} value: {1}")]
    InvalidEnv(&'static str, String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
