//! Error types for devdir

use thiserror::Error;

/// Error thrown when a config file has an extension we can't parse
#[derive(Debug, Error)]
#[error("Unsupported config format '{extension}'. Supported formats: {}", supported.join(", "))]
pub struct UnsupportedFormatError {
    pub extension: String,
    pub supported: Vec<String>,
}

/// General devdir error type
#[derive(Debug, Error)]
pub enum DevdirError {
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DevdirError>;
