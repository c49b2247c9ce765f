use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Unknown config key: {key}")]
    UnknownConfigKey { key: String },

    #[error("Failed to locate the user config directory")]
    NoConfigDirectory,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
