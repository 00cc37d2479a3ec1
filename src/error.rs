use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum DuscopeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to run '{command}': {source}")]
    Source {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unreadable du output at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("The usage report produced no entries")]
    EmptyInput,

    #[error("Selection invariant violated: {0}")]
    InvariantViolation(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DuscopeError>;
