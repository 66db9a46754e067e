//! JSON registry loader: parses and validates a registry source.
//!
//! Reading the source (file, network, embedded resource) is the caller's job;
//! this only turns text into a validated [`Registry`].

use baseline_core::errors::RegistryError;

use super::registry::Registry;
use super::types::RegistrySource;

/// Load and validate a registry from a JSON string.
pub fn load_from_str(json: &str) -> Result<Registry, RegistryError> {
    let source: RegistrySource = serde_json::from_str(json).map_err(|e| RegistryError::InvalidJson {
        message: e.to_string(),
    })?;
    let registry = Registry::from_source(source)?;
    tracing::debug!(
        version = registry.version(),
        features = registry.len(),
        signatures = registry.signature_count(),
        "loaded feature registry"
    );
    Ok(registry)
}

/// Load from raw bytes (e.g. a fetched resource body).
pub fn load_from_slice(bytes: &[u8]) -> Result<Registry, RegistryError> {
    let text = std::str::from_utf8(bytes).map_err(|e| RegistryError::InvalidJson {
        message: format!("registry source is not UTF-8: {e}"),
    })?;
    load_from_str(text)
}
