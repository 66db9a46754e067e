//! The registry value object.
//!
//! A `Registry` is built once per registry version and never mutated. Scans
//! share it through `Arc<Registry>`; installing a newer registry replaces the
//! `Arc`, so scans holding the old one finish against the old data.

use chrono::{DateTime, NaiveDate};

use baseline_core::errors::RegistryError;
use baseline_core::FxHashMap;

use crate::matcher::signature::{self, CompiledDescriptor};

use super::types::{FeatureDescriptor, RegistrySource};

/// Versioned, ordered, immutable set of feature descriptors.
#[derive(Debug, Clone)]
pub struct Registry {
    version: String,
    updated: NaiveDate,
    descriptors: Vec<FeatureDescriptor>,
    index: FxHashMap<String, usize>,
    compiled: Vec<CompiledDescriptor>,
    signatures_dropped: usize,
}

impl Registry {
    /// Build and validate a registry.
    ///
    /// Ids must be non-empty and unique and every descriptor must declare at
    /// least one non-blank signature. Blank signature strings are dropped
    /// with a warning; a descriptor left with none is rejected.
    pub fn new(
        version: impl Into<String>,
        updated: &str,
        descriptors: Vec<FeatureDescriptor>,
    ) -> Result<Self, RegistryError> {
        let updated = parse_date(updated)?;
        let mut index = FxHashMap::default();
        let mut cleaned = Vec::with_capacity(descriptors.len());
        let mut signatures_dropped = 0;

        for mut descriptor in descriptors {
            if descriptor.id.trim().is_empty() {
                return Err(RegistryError::EmptyId);
            }
            if index.contains_key(&descriptor.id) {
                return Err(RegistryError::DuplicateId { id: descriptor.id });
            }

            let before = descriptor.signatures.len();
            descriptor.signatures.retain(|s| !s.trim().is_empty());
            let dropped = before - descriptor.signatures.len();
            if dropped > 0 {
                tracing::warn!(
                    feature_id = %descriptor.id,
                    dropped,
                    "dropping blank signatures from registry entry"
                );
                signatures_dropped += dropped;
            }
            if descriptor.signatures.is_empty() {
                return Err(RegistryError::EmptySignatures { id: descriptor.id });
            }

            index.insert(descriptor.id.clone(), cleaned.len());
            cleaned.push(descriptor);
        }

        let compiled = cleaned
            .iter()
            .enumerate()
            .map(|(i, d)| signature::compile_descriptor(i, d))
            .collect();

        Ok(Self {
            version: version.into(),
            updated,
            descriptors: cleaned,
            index,
            compiled,
            signatures_dropped,
        })
    }

    /// Build from a deserialized source document.
    pub fn from_source(source: RegistrySource) -> Result<Self, RegistryError> {
        Self::new(source.version, &source.updated, source.features)
    }

    /// Look up a descriptor by id.
    pub fn lookup(&self, id: &str) -> Option<&FeatureDescriptor> {
        self.index.get(id).map(|&i| &self.descriptors[i])
    }

    /// All descriptors in registry order.
    pub fn descriptors(&self) -> &[FeatureDescriptor] {
        &self.descriptors
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn updated(&self) -> NaiveDate {
        self.updated
    }

    /// "v{version} ({updated})", as shown next to scan results.
    pub fn version_label(&self) -> String {
        format!("v{} ({})", self.version, self.updated.format("%Y-%m-%d"))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Total signatures across all descriptors.
    pub fn signature_count(&self) -> usize {
        self.descriptors.iter().map(|d| d.signatures.len()).sum()
    }

    /// Blank signatures removed at construction.
    pub fn signatures_dropped(&self) -> usize {
        self.signatures_dropped
    }

    /// Compiled matcher data, parallel to [`Registry::descriptors`].
    pub(crate) fn compiled(&self) -> &[CompiledDescriptor] {
        &self.compiled
    }
}

/// Accepts a plain date ("2024-06-01") or a full RFC 3339 timestamp.
fn parse_date(value: &str) -> Result<NaiveDate, RegistryError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|e| RegistryError::InvalidDate {
            value: value.to_string(),
            message: e.to_string(),
        })
}
