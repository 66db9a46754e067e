//! Signature matcher: token-aware lexical detection of feature usage.
//!
//! - `types.rs`: the Match span type
//! - `signature.rs`: per-descriptor compilation (Aho-Corasick + pre-check)
//! - `offsets.rs`: byte → char offset conversion
//! - `matcher.rs`: the scanning pass itself
//! - `diagnostics.rs`: per-scan counters

pub mod diagnostics;
#[allow(clippy::module_inception)]
pub mod matcher;
pub mod offsets;
pub mod signature;
pub mod types;

pub use diagnostics::MatchDiagnostics;
pub use matcher::SignatureMatcher;
pub use types::Match;
