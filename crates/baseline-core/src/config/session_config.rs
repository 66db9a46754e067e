//! Scan session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for caller-owned scan sessions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Quiet period after the last edit before a scan is due. Default: 1000ms.
    pub debounce_ms: Option<u64>,
    /// Skip scans whose text is identical to the last scanned text. Default: true.
    pub skip_unchanged: Option<bool>,
}

impl SessionConfig {
    /// Returns the effective debounce interval, defaulting to one second.
    pub fn effective_debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms.unwrap_or(1_000))
    }

    /// Returns whether unchanged text is skipped, defaulting to true.
    pub fn effective_skip_unchanged(&self) -> bool {
        self.skip_unchanged.unwrap_or(true)
    }
}
