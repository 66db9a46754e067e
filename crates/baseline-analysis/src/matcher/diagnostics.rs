//! Matcher diagnostics: per-scan counters.

use std::time::Duration;

/// Counters collected during one matcher pass.
#[derive(Debug, Clone, Default)]
pub struct MatchDiagnostics {
    pub descriptors_total: usize,
    pub descriptors_scanned: usize,
    /// Skipped because no signature's leading byte occurs in the text.
    pub descriptors_prechecked_out: usize,
    /// Skipped by `disabled_features` or the category filter.
    pub descriptors_filtered: usize,
    /// Skipped because their automaton failed to build or to run.
    pub descriptors_degraded: usize,
    pub raw_hits: usize,
    pub boundary_rejections: usize,
    /// Hits merged into a same-start hit of the same feature.
    pub overlaps_merged: usize,
    /// Hits starting inside an earlier span of the same feature.
    pub overlaps_dropped: usize,
    pub features_truncated: usize,
    pub matches: usize,
    pub match_duration: Duration,
}

impl MatchDiagnostics {
    /// Merge another diagnostics into this one (additive).
    pub fn merge(&mut self, other: &MatchDiagnostics) {
        self.descriptors_total += other.descriptors_total;
        self.descriptors_scanned += other.descriptors_scanned;
        self.descriptors_prechecked_out += other.descriptors_prechecked_out;
        self.descriptors_filtered += other.descriptors_filtered;
        self.descriptors_degraded += other.descriptors_degraded;
        self.raw_hits += other.raw_hits;
        self.boundary_rejections += other.boundary_rejections;
        self.overlaps_merged += other.overlaps_merged;
        self.overlaps_dropped += other.overlaps_dropped;
        self.features_truncated += other.features_truncated;
        self.matches += other.matches;
        self.match_duration += other.match_duration;
    }

    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "matcher: {} descriptors ({} scanned, {} prechecked out, {} filtered, {} degraded), \
             {} raw hits, {} boundary rejections, {} merged, {} dropped, {} matches in {:?}",
            self.descriptors_total,
            self.descriptors_scanned,
            self.descriptors_prechecked_out,
            self.descriptors_filtered,
            self.descriptors_degraded,
            self.raw_hits,
            self.boundary_rejections,
            self.overlaps_merged,
            self.overlaps_dropped,
            self.matches,
            self.match_duration,
        )
    }
}
