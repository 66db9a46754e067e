//! Position resolution outcomes that prevent anchoring a finding.

use std::fmt;

use super::error_code::{self, BaselineErrorCode};

/// Why a span could not be anchored in the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvableReason {
    /// The span ends past the end of the document's text.
    OutOfRange,
    /// The text at the span no longer equals the matched text.
    TextDrift,
    /// The document has no text-bearing node covering the start offset.
    NoCoveringNode,
}

impl fmt::Display for UnresolvableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => f.write_str("span lies beyond the document text"),
            Self::TextDrift => f.write_str("document text changed at the span"),
            Self::NoCoveringNode => f.write_str("no text node covers the span start"),
        }
    }
}

/// A finding that cannot be anchored. Non-fatal: it concerns one finding only.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("cannot anchor '{feature_id}' at {start}..{end}: {reason}")]
    Unresolvable {
        feature_id: String,
        start: usize,
        end: usize,
        reason: UnresolvableReason,
    },
}

impl ResolveError {
    pub fn reason(&self) -> UnresolvableReason {
        match self {
            Self::Unresolvable { reason, .. } => *reason,
        }
    }
}

impl BaselineErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        error_code::UNRESOLVABLE
    }
}
