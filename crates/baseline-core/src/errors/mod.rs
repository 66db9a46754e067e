//! Error types for every subsystem, each carrying a stable error code.

pub mod error_code;
mod config_error;
mod registry_error;
mod resolve_error;
mod scan_error;

pub use config_error::ConfigError;
pub use registry_error::RegistryError;
pub use resolve_error::{ResolveError, UnresolvableReason};
pub use scan_error::ScanError;
