//! Signature matcher: scans text for every registry entry's signatures.
//!
//! Pure and stateless with respect to its inputs: identical text, registry
//! and configuration always yield the identical, ordered match list.

use std::time::Instant;

use baseline_core::config::ScanConfig;
use baseline_core::FxHashSet;

use crate::registry::types::Category;
use crate::registry::Registry;

use super::diagnostics::MatchDiagnostics;
use super::offsets::OffsetTable;
use super::signature::{BytePresence, CompiledDescriptor};
use super::types::Match;

/// A byte-offset hit before char conversion.
struct RawHit {
    descriptor: usize,
    start: usize,
    end: usize,
}

/// Token-aware multi-signature matcher.
#[derive(Debug, Clone)]
pub struct SignatureMatcher {
    /// Per-feature match limit (0 = unlimited).
    match_limit: usize,
    disabled: FxHashSet<String>,
    /// `None` = all categories.
    categories: Option<Vec<Category>>,
}

impl SignatureMatcher {
    /// Matcher with default limits and no filtering.
    pub fn new() -> Self {
        Self::with_config(&ScanConfig::default())
    }

    pub fn with_config(config: &ScanConfig) -> Self {
        let categories = (!config.categories.is_empty()).then(|| {
            [Category::Javascript, Category::Css, Category::Html, Category::Other]
                .into_iter()
                .filter(|c| config.is_category_enabled(c.name()))
                .collect()
        });
        Self {
            match_limit: config.effective_max_matches_per_feature(),
            disabled: config.disabled_features.iter().cloned().collect(),
            categories,
        }
    }

    /// Set per-feature match limit (0 = unlimited).
    pub fn set_match_limit(&mut self, limit: usize) {
        self.match_limit = limit;
    }

    /// Scan `text` against every descriptor of `registry`.
    ///
    /// Matches are ordered by `start`, then `feature_id`, then `end`.
    pub fn scan(&self, text: &str, registry: &Registry) -> Vec<Match> {
        self.scan_with_diagnostics(text, registry).0
    }

    pub fn scan_with_diagnostics(
        &self,
        text: &str,
        registry: &Registry,
    ) -> (Vec<Match>, MatchDiagnostics) {
        let started = Instant::now();
        let mut diag = MatchDiagnostics {
            descriptors_total: registry.len(),
            ..Default::default()
        };

        let presence = BytePresence::of(text);
        let mut hits: Vec<RawHit> = Vec::new();

        for compiled in registry.compiled() {
            let descriptor = &registry.descriptors()[compiled.index];
            if !self.is_enabled(&descriptor.id, compiled.category) {
                diag.descriptors_filtered += 1;
                continue;
            }
            if compiled.is_degraded() {
                diag.descriptors_degraded += 1;
                continue;
            }
            // Short-circuit: no signature can start anywhere in the text.
            if !compiled.may_match(&presence) {
                diag.descriptors_prechecked_out += 1;
                continue;
            }
            diag.descriptors_scanned += 1;

            match self.scan_descriptor(text, compiled, &mut diag) {
                Some(mut spans) => {
                    if self.match_limit > 0 && spans.len() > self.match_limit {
                        tracing::warn!(
                            feature_id = %descriptor.id,
                            limit = self.match_limit,
                            found = spans.len(),
                            "match limit reached for feature, truncating"
                        );
                        spans.truncate(self.match_limit);
                        diag.features_truncated += 1;
                    }
                    hits.extend(spans.into_iter().map(|(start, end)| RawHit {
                        descriptor: compiled.index,
                        start,
                        end,
                    }));
                }
                None => {
                    diag.descriptors_scanned -= 1;
                    diag.descriptors_degraded += 1;
                }
            }
        }

        let positions = hits.iter().flat_map(|h| [h.start, h.end]).collect();
        let offsets = OffsetTable::build(text, positions);

        let mut matches: Vec<Match> = hits
            .into_iter()
            .map(|h| Match {
                feature_id: registry.descriptors()[h.descriptor].id.clone(),
                start: offsets.char_offset(h.start),
                end: offsets.char_offset(h.end),
                matched_text: text[h.start..h.end].to_string(),
            })
            .collect();
        matches.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| a.feature_id.cmp(&b.feature_id))
                .then_with(|| a.end.cmp(&b.end))
        });

        diag.matches = matches.len();
        diag.match_duration = started.elapsed();
        tracing::debug!("{}", diag.summary());
        (matches, diag)
    }

    /// Collect merged byte spans for one descriptor, sorted by start.
    /// Returns `None` if the automaton refused the input.
    fn scan_descriptor(
        &self,
        text: &str,
        compiled: &CompiledDescriptor,
        diag: &mut MatchDiagnostics,
    ) -> Option<Vec<(usize, usize)>> {
        let automaton = compiled.automaton.as_ref()?;
        let iter = match automaton.try_find_overlapping_iter(text) {
            Ok(iter) => iter,
            Err(e) => {
                tracing::warn!(error = %e, "signature automaton rejected input, skipping descriptor");
                return None;
            }
        };

        let mut spans: Vec<(usize, usize)> = Vec::new();
        for hit in iter {
            diag.raw_hits += 1;
            let signature = &compiled.signatures[hit.pattern().as_usize()];
            if !signature.boundaries_hold(text, hit.start(), hit.end(), compiled.category) {
                diag.boundary_rejections += 1;
                continue;
            }
            spans.push((hit.start(), hit.end()));
        }

        // Hits starting at the same offset merge into the longest; a hit
        // starting inside an accepted span is dropped, so "????" against
        // "??" yields 0..2 and 2..4.
        spans.sort_unstable();
        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
        for (start, end) in spans {
            match merged.last_mut() {
                Some(last) if start == last.0 => {
                    last.1 = last.1.max(end);
                    diag.overlaps_merged += 1;
                }
                Some(last) if start < last.1 => diag.overlaps_dropped += 1,
                _ => merged.push((start, end)),
            }
        }
        Some(merged)
    }

    fn is_enabled(&self, id: &str, category: Category) -> bool {
        if self.disabled.contains(id) {
            return false;
        }
        match &self.categories {
            Some(enabled) => enabled.contains(&category),
            None => true,
        }
    }
}

impl Default for SignatureMatcher {
    fn default() -> Self {
        Self::new()
    }
}
