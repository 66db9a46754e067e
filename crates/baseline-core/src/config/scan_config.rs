//! Matcher configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the signature matcher.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum matches kept per feature per scan. 0 = unlimited. Default: 100.
    pub max_matches_per_feature: Option<usize>,
    /// Feature ids that are never scanned.
    #[serde(default)]
    pub disabled_features: Vec<String>,
    /// If non-empty, only descriptors in these categories are scanned
    /// ("javascript", "css", "html", "other").
    #[serde(default)]
    pub categories: Vec<String>,
}

impl ScanConfig {
    /// Returns the effective per-feature match limit, defaulting to 100.
    pub fn effective_max_matches_per_feature(&self) -> usize {
        self.max_matches_per_feature.unwrap_or(100)
    }

    /// Whether a category name passes the category filter.
    pub fn is_category_enabled(&self, category: &str) -> bool {
        self.categories.is_empty() || self.categories.iter().any(|c| c.eq_ignore_ascii_case(category))
    }
}
