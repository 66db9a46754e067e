//! Built-in registry snapshot embedded at compile time via `include_str!`.

use baseline_core::errors::RegistryError;

use super::loader;
use super::registry::Registry;

const BUILTIN_REGISTRY: &str = include_str!("data/baseline-features.json");

/// Parse the embedded snapshot.
pub fn builtin_registry() -> Result<Registry, RegistryError> {
    loader::load_from_str(BUILTIN_REGISTRY)
}

impl Registry {
    /// The registry snapshot shipped with this crate.
    pub fn builtin() -> Result<Self, RegistryError> {
        builtin_registry()
    }
}
