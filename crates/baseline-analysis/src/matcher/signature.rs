//! Per-descriptor signature compilation.
//!
//! Each descriptor gets its own Aho-Corasick automaton so that a descriptor
//! whose signatures fail to compile only disables itself. The leading bytes
//! of all signatures form a cheap pre-check against a byte-presence table of
//! the scanned text.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use smallvec::SmallVec;

use crate::registry::types::{Category, FeatureDescriptor};

/// One signature with its boundary requirements resolved.
#[derive(Debug, Clone)]
pub struct CompiledSignature {
    pub text: String,
    /// First char is an identifier char: the char before a hit must not be.
    pub check_leading: bool,
    /// Last char is an identifier char: the char after a hit must not be.
    pub check_trailing: bool,
}

impl CompiledSignature {
    pub fn new(text: &str, category: Category) -> Self {
        let check_leading = text.chars().next().is_some_and(|c| category.is_identifier_char(c));
        let check_trailing = text.chars().next_back().is_some_and(|c| category.is_identifier_char(c));
        Self {
            text: text.to_string(),
            check_leading,
            check_trailing,
        }
    }

    /// Whether the signature needs no boundary checks at all (`?.`, `:has(`).
    pub fn is_punctuation(&self) -> bool {
        !self.check_leading && !self.check_trailing
    }

    /// Check the token-boundary rule for a hit at `text[start..end]`.
    /// `start` and `end` must be char boundaries.
    pub fn boundaries_hold(&self, text: &str, start: usize, end: usize, category: Category) -> bool {
        if self.check_leading {
            if let Some(prev) = text[..start].chars().next_back() {
                if category.is_identifier_char(prev) {
                    return false;
                }
            }
        }
        if self.check_trailing {
            if let Some(next) = text[end..].chars().next() {
                if category.is_identifier_char(next) {
                    return false;
                }
            }
        }
        true
    }
}

/// Matcher-ready form of one registry entry.
#[derive(Debug, Clone)]
pub struct CompiledDescriptor {
    /// Position of the descriptor in the registry.
    pub index: usize,
    pub category: Category,
    pub signatures: SmallVec<[CompiledSignature; 2]>,
    /// Distinct first bytes of all signatures.
    pub leading_bytes: SmallVec<[u8; 4]>,
    /// `None` when the automaton failed to build; the descriptor is degraded
    /// and contributes no matches.
    pub automaton: Option<AhoCorasick>,
}

impl CompiledDescriptor {
    pub fn is_degraded(&self) -> bool {
        self.automaton.is_none()
    }

    /// Pre-check: can any signature possibly start somewhere in the text?
    pub fn may_match(&self, presence: &BytePresence) -> bool {
        self.leading_bytes.iter().any(|&b| presence.contains(b))
    }
}

/// Compile a descriptor. Never fails: build errors degrade the descriptor.
pub fn compile_descriptor(index: usize, descriptor: &FeatureDescriptor) -> CompiledDescriptor {
    let signatures: SmallVec<[CompiledSignature; 2]> = descriptor
        .signatures
        .iter()
        .map(|s| CompiledSignature::new(s, descriptor.category))
        .collect();

    let mut leading_bytes: SmallVec<[u8; 4]> = SmallVec::new();
    for sig in &signatures {
        if let Some(&b) = sig.text.as_bytes().first() {
            if !leading_bytes.contains(&b) {
                leading_bytes.push(b);
            }
        }
    }

    let automaton = if signatures.is_empty() {
        None
    } else {
        match AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .build(signatures.iter().map(|s| s.text.as_str()))
        {
            Ok(ac) => Some(ac),
            Err(e) => {
                tracing::warn!(
                    feature_id = %descriptor.id,
                    error = %e,
                    "failed to compile signatures, descriptor disabled"
                );
                None
            }
        }
    };

    CompiledDescriptor {
        index,
        category: descriptor.category,
        signatures,
        leading_bytes,
        automaton,
    }
}

/// Which byte values occur in a text. Built once per scan.
pub struct BytePresence([bool; 256]);

impl BytePresence {
    pub fn of(text: &str) -> Self {
        let mut table = [false; 256];
        for &b in text.as_bytes() {
            table[b as usize] = true;
        }
        Self(table)
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.0[byte as usize]
    }
}
