//! Byte → char offset conversion.
//!
//! Automaton hits come back as byte offsets; matches are reported in chars.
//! All positions needed by one scan are converted in a single pass over the
//! text. ASCII text short-circuits to the identity mapping.

pub struct OffsetTable {
    ascii: bool,
    bytes: Vec<usize>,
    chars: Vec<usize>,
}

impl OffsetTable {
    /// Build a table for the given byte positions (any order, duplicates ok).
    /// Every position must be a char boundary of `text`.
    pub fn build(text: &str, mut positions: Vec<usize>) -> Self {
        if text.is_ascii() {
            return Self {
                ascii: true,
                bytes: Vec::new(),
                chars: Vec::new(),
            };
        }
        positions.sort_unstable();
        positions.dedup();

        let mut chars = Vec::with_capacity(positions.len());
        let mut pending = positions.iter().peekable();
        let mut count = 0;
        for (byte, _) in text.char_indices() {
            while let Some(&&p) = pending.peek() {
                if p > byte {
                    break;
                }
                chars.push(count);
                pending.next();
            }
            count += 1;
        }
        chars.extend(pending.map(|_| count));

        Self {
            ascii: false,
            bytes: positions,
            chars,
        }
    }

    /// Char offset for a byte position registered at build time.
    pub fn char_offset(&self, byte: usize) -> usize {
        if self.ascii {
            return byte;
        }
        match self.bytes.binary_search(&byte) {
            Ok(i) => self.chars[i],
            // Unregistered position: fall back to the nearest registered one below.
            Err(0) => 0,
            Err(i) => self.chars[i - 1],
        }
    }
}

/// Char length of a string.
pub fn char_len(text: &str) -> usize {
    if text.is_ascii() {
        text.len()
    } else {
        text.chars().count()
    }
}
