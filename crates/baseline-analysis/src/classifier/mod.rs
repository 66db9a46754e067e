//! Classifier: resolves matches to registry-sourced status verdicts.

#[allow(clippy::module_inception)]
pub mod classifier;

pub use classifier::Classifier;
