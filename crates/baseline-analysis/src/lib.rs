//! # baseline-analysis
//!
//! Detection engine for web-platform feature usage:
//! registry → signature matcher → classifier → aggregator, plus the position
//! resolver that anchors findings in a live document and the caller-owned
//! scan session that debounces and coalesces rescans.

pub mod classifier;
pub mod engine;
pub mod matcher;
pub mod registry;
pub mod report;
pub mod resolver;

pub use classifier::Classifier;
pub use engine::{Clock, ScanSession, Scanner};
pub use matcher::{Match, SignatureMatcher};
pub use registry::{Category, FeatureDescriptor, Registry, SupportStatus};
pub use report::{Finding, FindingStatus, Report};
pub use resolver::{Anchor, DocumentSnapshot, PositionResolver};
