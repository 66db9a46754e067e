//! Resolution walks the snapshot's text nodes in document order with a
//! running char counter. The document may have changed since the scanned
//! text was captured, so the span's text is compared with the matched text
//! first; a mismatch is unresolvable rather than anchored to the wrong place.

use serde::{Deserialize, Serialize};

use baseline_core::errors::{ResolveError, UnresolvableReason};

use crate::matcher::Match;
use crate::report::Finding;

use super::document::{DocumentSnapshot, NodeRef};

/// Anything that names a feature span in the flattened text.
pub trait TextSpan {
    fn feature_id(&self) -> &str;
    fn start(&self) -> usize;
    fn end(&self) -> usize;
    /// Literal text expected at the span.
    fn expected_text(&self) -> &str;
}

impl TextSpan for Match {
    fn feature_id(&self) -> &str {
        &self.feature_id
    }
    fn start(&self) -> usize {
        self.start
    }
    fn end(&self) -> usize {
        self.end
    }
    fn expected_text(&self) -> &str {
        &self.matched_text
    }
}

impl TextSpan for Finding {
    fn feature_id(&self) -> &str {
        &self.feature_id
    }
    fn start(&self) -> usize {
        self.start
    }
    fn end(&self) -> usize {
        self.end
    }
    fn expected_text(&self) -> &str {
        &self.matched_text
    }
}

/// A renderer-addressable location, valid until the document next changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub container_ref: NodeRef,
    /// Char offsets within the container node.
    pub inner_offset_start: usize,
    pub inner_offset_end: usize,
    /// The span continues past the container's end; `inner_offset_end` was
    /// clamped to the container length.
    pub partial: bool,
}

impl Anchor {
    pub fn is_partial(&self) -> bool {
        self.partial
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PositionResolver;

impl PositionResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve<S: TextSpan + ?Sized>(
        &self,
        span: &S,
        snapshot: &DocumentSnapshot,
    ) -> Result<Anchor, ResolveError> {
        let (start, end) = (span.start(), span.end());
        let unresolvable = |reason| ResolveError::Unresolvable {
            feature_id: span.feature_id().to_string(),
            start,
            end,
            reason,
        };

        let mut offset = 0;
        let mut covering: Option<(NodeRef, usize, usize)> = None;
        let mut found = String::with_capacity(span.expected_text().len());

        for node in &snapshot.nodes {
            let node_start = offset;
            let node_end = offset + node.char_len();

            if covering.is_none() && node_start <= start && start < node_end {
                covering = Some((node.node_ref, node_start, node_end));
            }
            let lo = start.max(node_start);
            let hi = end.min(node_end);
            if lo < hi {
                found.extend(node.text.chars().skip(lo - node_start).take(hi - lo));
            }

            offset = node_end;
            if offset >= end && covering.is_some() {
                break;
            }
        }

        if end > offset {
            return Err(unresolvable(UnresolvableReason::OutOfRange));
        }
        let Some((container_ref, node_start, node_end)) = covering else {
            return Err(unresolvable(UnresolvableReason::NoCoveringNode));
        };
        if found != span.expected_text() {
            tracing::debug!(
                feature_id = span.feature_id(),
                start,
                end,
                "span text drifted since scan"
            );
            return Err(unresolvable(UnresolvableReason::TextDrift));
        }

        Ok(Anchor {
            container_ref,
            inner_offset_start: start - node_start,
            inner_offset_end: end.min(node_end) - node_start,
            partial: end > node_end,
        })
    }
}
