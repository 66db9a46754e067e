//! Findings, reports, and the aggregator that builds them.

pub mod aggregator;
pub mod types;

pub use aggregator::aggregate;
pub use types::{Counts, FeatureGroup, Finding, FindingStatus, Report};
