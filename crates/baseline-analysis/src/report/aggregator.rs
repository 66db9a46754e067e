//! Result aggregator: dedup, sort, count.

use chrono::{DateTime, Utc};

use super::types::{Counts, Finding, Report};

/// Build a report from classified findings.
///
/// Findings sharing `(feature_id, start, end)` collapse to the first one.
/// Re-aggregating a report's own findings with the same timestamp and
/// version reproduces the report.
pub fn aggregate(
    findings: Vec<Finding>,
    timestamp: DateTime<Utc>,
    registry_version: impl Into<String>,
) -> Report {
    let mut findings = findings;

    // Dedup: identical spans of the same feature are one finding.
    findings.sort_by(|a, b| a.key().cmp(&b.key()));
    findings.dedup_by(|a, b| a.key() == b.key());

    findings.sort_by(|a, b| {
        b.status
            .severity()
            .cmp(&a.status.severity())
            .then_with(|| a.start.cmp(&b.start))
            .then_with(|| a.feature_id.cmp(&b.feature_id))
            .then_with(|| a.end.cmp(&b.end))
    });

    let mut counts = Counts::default();
    for finding in &findings {
        counts.record(finding.status);
    }

    Report {
        timestamp,
        registry_version: registry_version.into(),
        findings,
        counts,
    }
}
