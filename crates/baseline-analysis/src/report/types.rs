//! Core types for classified findings and reports.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matcher::Match;
use crate::registry::types::{Category, SupportStatus};

/// Status verdict of a finding: a registry tier, or `Unknown` when the
/// finding's feature id is absent from the registry used to classify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    WidelyAvailable,
    NewlyAvailable,
    LimitedAvailability,
    Unknown,
}

impl FindingStatus {
    /// Higher is more severe. Reports list the most severe findings first.
    pub fn severity(self) -> u8 {
        match self {
            Self::WidelyAvailable => 0,
            Self::NewlyAvailable => 1,
            Self::LimitedAvailability => 2,
            Self::Unknown => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::WidelyAvailable => "widely_available",
            Self::NewlyAvailable => "newly_available",
            Self::LimitedAvailability => "limited_availability",
            Self::Unknown => "unknown",
        }
    }
}

impl From<SupportStatus> for FindingStatus {
    fn from(status: SupportStatus) -> Self {
        match status {
            SupportStatus::WidelyAvailable => Self::WidelyAvailable,
            SupportStatus::NewlyAvailable => Self::NewlyAvailable,
            SupportStatus::LimitedAvailability => Self::LimitedAvailability,
        }
    }
}

impl fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A match enriched with registry metadata at classification time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub feature_id: String,
    pub start: usize,
    pub end: usize,
    pub matched_text: String,
    pub status: FindingStatus,
    pub display_name: String,
    /// `None` when the feature is unknown to the registry.
    pub category: Option<Category>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
}

impl Finding {
    pub fn key(&self) -> (&str, usize, usize) {
        (&self.feature_id, self.start, self.end)
    }

    /// The underlying span, without classification data.
    pub fn to_match(&self) -> Match {
        Match {
            feature_id: self.feature_id.clone(),
            start: self.start,
            end: self.end,
            matched_text: self.matched_text.clone(),
        }
    }
}

/// Finding counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub widely_available: usize,
    pub newly_available: usize,
    pub limited_availability: usize,
    pub unknown: usize,
}

impl Counts {
    pub fn record(&mut self, status: FindingStatus) {
        match status {
            FindingStatus::WidelyAvailable => self.widely_available += 1,
            FindingStatus::NewlyAvailable => self.newly_available += 1,
            FindingStatus::LimitedAvailability => self.limited_availability += 1,
            FindingStatus::Unknown => self.unknown += 1,
        }
    }

    pub fn get(&self, status: FindingStatus) -> usize {
        match status {
            FindingStatus::WidelyAvailable => self.widely_available,
            FindingStatus::NewlyAvailable => self.newly_available,
            FindingStatus::LimitedAvailability => self.limited_availability,
            FindingStatus::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        self.widely_available + self.newly_available + self.limited_availability + self.unknown
    }
}

/// Immutable result of one scan.
///
/// Findings are deduplicated and ordered by severity (descending), then
/// `start`, `feature_id` and `end`. Grouping is computed on demand from the
/// flat sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: DateTime<Utc>,
    pub registry_version: String,
    pub findings: Vec<Finding>,
    pub counts: Counts,
}

/// Findings of one feature, in report order.
#[derive(Debug, Clone)]
pub struct FeatureGroup<'a> {
    pub feature_id: &'a str,
    pub display_name: &'a str,
    pub status: FindingStatus,
    pub findings: Vec<&'a Finding>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Findings grouped by feature, groups ordered by first appearance.
    pub fn group_by_feature(&self) -> Vec<FeatureGroup<'_>> {
        let mut groups: Vec<FeatureGroup<'_>> = Vec::new();
        for finding in &self.findings {
            match groups.iter_mut().find(|g| g.feature_id == finding.feature_id) {
                Some(group) => group.findings.push(finding),
                None => groups.push(FeatureGroup {
                    feature_id: &finding.feature_id,
                    display_name: &finding.display_name,
                    status: finding.status,
                    findings: vec![finding],
                }),
            }
        }
        groups
    }

    /// Status line summarizing the report, most severe tier first.
    pub fn headline(&self) -> String {
        let c = &self.counts;
        if c.total() == 0 {
            "No web platform features detected".to_string()
        } else if c.unknown > 0 {
            format!("Found {} features missing from registry {}", c.unknown, self.registry_version)
        } else if c.limited_availability > 0 {
            format!("Found {} limited-availability features", c.limited_availability)
        } else if c.newly_available > 0 {
            format!("Found {} newly-available features", c.newly_available)
        } else {
            format!("All {} features are widely available", c.widely_available)
        }
    }
}
