//! The classifier holds no feature knowledge of its own: every status,
//! label and description comes from the registry passed in, so the same
//! matches can be classified again against a newer registry.

use baseline_core::errors::error_code;

use crate::matcher::Match;
use crate::registry::Registry;
use crate::report::types::{Finding, FindingStatus};

#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify one match. An id missing from the registry yields an
    /// `Unknown` finding instead of an error.
    pub fn classify(&self, m: &Match, registry: &Registry) -> Finding {
        match registry.lookup(&m.feature_id) {
            Some(descriptor) => Finding {
                feature_id: m.feature_id.clone(),
                start: m.start,
                end: m.end,
                matched_text: m.matched_text.clone(),
                status: descriptor.status.into(),
                display_name: descriptor.display_name.clone(),
                category: Some(descriptor.category),
                description: descriptor.description.clone(),
                docs_url: descriptor.docs_url.clone(),
            },
            None => {
                tracing::warn!(
                    code = error_code::UNKNOWN_FEATURE_ID,
                    feature_id = %m.feature_id,
                    registry_version = registry.version(),
                    "feature id not in registry, classifying as unknown"
                );
                Finding {
                    feature_id: m.feature_id.clone(),
                    start: m.start,
                    end: m.end,
                    matched_text: m.matched_text.clone(),
                    status: FindingStatus::Unknown,
                    display_name: m.feature_id.clone(),
                    category: None,
                    description: format!("Information about {} not available.", m.feature_id),
                    docs_url: None,
                }
            }
        }
    }

    pub fn classify_all(&self, matches: &[Match], registry: &Registry) -> Vec<Finding> {
        matches.iter().map(|m| self.classify(m, registry)).collect()
    }
}
