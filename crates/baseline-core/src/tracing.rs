//! Tracing subscriber setup.
//!
//! The filter comes from the `BASELINE_LOG` environment variable when set,
//! otherwise from [`LoggingConfig::level`]. Installing twice is a no-op.

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::errors::ConfigError;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "BASELINE_LOG";

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Build the filter for a config, preferring `BASELINE_LOG`.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    let directive = std::env::var(LOG_ENV).unwrap_or_else(|_| config.level.clone());
    EnvFilter::try_new(&directive).map_err(|e| ConfigError::InvalidFilter {
        filter: directive,
        message: e.to_string(),
    })
}

/// Install the global subscriber. Returns `Ok(true)` if this call installed
/// it, `Ok(false)` if a subscriber was already present.
pub fn init(config: &LoggingConfig) -> Result<bool, ConfigError> {
    if INSTALLED.get().is_some() {
        return Ok(false);
    }
    let filter = build_filter(config)?;

    let fmt_layer = if config.json {
        fmt::layer().json().with_target(config.with_target).boxed()
    } else {
        fmt::layer().with_target(config.with_target).boxed()
    };

    let installed = tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init()
        .is_ok();
    let _ = INSTALLED.set(installed);
    Ok(installed)
}
