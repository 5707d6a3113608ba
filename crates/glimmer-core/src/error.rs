//! Error types for Glimmer

use thiserror::Error;

/// The main error type for Glimmer operations
#[derive(Debug, Error)]
pub enum GlimmerError {
    #[error("Scene not found: {0}")]
    SceneNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Invalid enum value: {value} is not one of {allowed:?}")]
    InvalidEnumValue {
        value: String,
        allowed: Vec<String>,
    },
}

/// Result type alias for Glimmer operations
pub type Result<T> = std::result::Result<T, GlimmerError>;

impl From<toml::de::Error> for GlimmerError {
    fn from(err: toml::de::Error) -> Self {
        GlimmerError::TomlParseError(err.to_string())
    }
}
