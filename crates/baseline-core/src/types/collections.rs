//! Fast hash collections used across the workspace.
//!
//! Feature ids are short strings looked up on every classification, so the
//! FxHash family is used instead of SipHash.

pub use rustc_hash::{FxHashMap, FxHashSet};
