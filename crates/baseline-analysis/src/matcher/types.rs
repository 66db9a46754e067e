use serde::{Deserialize, Serialize};

/// A raw hit against the flattened source text.
///
/// Offsets are char (Unicode scalar value) offsets, `start <= end <= len`.
/// Identity for dedup purposes is `(feature_id, start, end)`; `matched_text`
/// is the literal text found at the span and is what position resolution
/// checks for drift.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    pub feature_id: String,
    pub start: usize,
    pub end: usize,
    pub matched_text: String,
}

impl Match {
    pub fn key(&self) -> (&str, usize, usize) {
        (&self.feature_id, self.start, self.end)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
