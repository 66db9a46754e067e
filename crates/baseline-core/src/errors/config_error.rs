use std::path::PathBuf;

use super::error_code::{self, BaselineErrorCode};

/// Errors raised while reading a `BaselineConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },
}

impl BaselineErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
