//! Feature registry: immutable, versioned feature metadata.
//!
//! - `types.rs`: FeatureDescriptor, Category, SupportStatus serde types
//! - `loader.rs`: JSON source → validated Registry
//! - `registry.rs`: the Registry value object and its lookup index
//! - `builtin.rs`: snapshot embedded at compile time

pub mod builtin;
pub mod loader;
#[allow(clippy::module_inception)]
pub mod registry;
pub mod types;

pub use registry::Registry;
pub use types::{Category, FeatureDescriptor, RegistrySource, SupportStatus};
