//! # baseline-core
//!
//! Foundation crate for the Baseline feature scanner.
//! Defines the shared errors, config, tracing setup, and collection aliases.
//! The analysis crate depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::BaselineConfig;
pub use errors::error_code::BaselineErrorCode;
pub use types::collections::{FxHashMap, FxHashSet};
