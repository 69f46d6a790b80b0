#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read configuration {0}: {1}")]
    FileRead(String, String),

    #[error("Invalid TOML in configuration: {0}")]
    Parse(String),

    #[error("Invalid configuration value: {0}")]
    Validation(String),
}
