//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the tracing subscriber installed by [`crate::tracing::init`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `BASELINE_LOG` is unset (e.g. "info",
    /// "baseline_analysis=debug").
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
    /// Include the event target in human-readable output.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            with_target: true,
        }
    }
}
