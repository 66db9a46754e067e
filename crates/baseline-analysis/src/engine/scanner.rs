//! Scanner: text + registry → Report.
//!
//! The scanner holds the currently installed registry as an `Arc`. A scan
//! clones the `Arc` up front, so installing a newer registry never affects a
//! scan already running against the old one.

use std::sync::Arc;

use baseline_core::config::BaselineConfig;
use baseline_core::errors::{ResolveError, ScanError};

use crate::classifier::Classifier;
use crate::matcher::{MatchDiagnostics, SignatureMatcher};
use crate::registry::Registry;
use crate::report::{aggregate, Report};
use crate::resolver::{Anchor, DocumentSnapshot, PositionResolver, TextSpan};

use super::clock::{Clock, SystemClock};

pub struct Scanner {
    registry: Option<Arc<Registry>>,
    matcher: SignatureMatcher,
    classifier: Classifier,
    resolver: PositionResolver,
    clock: Arc<dyn Clock>,
}

impl Scanner {
    /// Scanner with no registry loaded; scans fail until one is installed.
    pub fn new(config: &BaselineConfig) -> Self {
        Self {
            registry: None,
            matcher: SignatureMatcher::with_config(&config.scan),
            classifier: Classifier::new(),
            resolver: PositionResolver::new(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Install a registry, returning the previous one.
    pub fn load_registry(&mut self, registry: Arc<Registry>) -> Option<Arc<Registry>> {
        tracing::info!(
            version = registry.version(),
            features = registry.len(),
            "registry installed"
        );
        self.registry.replace(registry)
    }

    pub fn unload_registry(&mut self) -> Option<Arc<Registry>> {
        self.registry.take()
    }

    pub fn registry(&self) -> Option<&Arc<Registry>> {
        self.registry.as_ref()
    }

    pub fn matcher(&self) -> &SignatureMatcher {
        &self.matcher
    }

    /// Scan text into a report. Refuses with `RegistryNotLoaded` rather than
    /// returning an empty report when no registry is installed.
    pub fn scan(&self, text: &str) -> Result<Report, ScanError> {
        self.scan_with_diagnostics(text).map(|(report, _)| report)
    }

    pub fn scan_with_diagnostics(
        &self,
        text: &str,
    ) -> Result<(Report, MatchDiagnostics), ScanError> {
        let registry = self.registry.clone().ok_or(ScanError::RegistryNotLoaded)?;

        let (matches, diag) = self.matcher.scan_with_diagnostics(text, &registry);
        let findings = self.classifier.classify_all(&matches, &registry);
        let report = aggregate(findings, self.clock.now(), registry.version());

        tracing::debug!(
            registry_version = registry.version(),
            findings = report.len(),
            widely = report.counts.widely_available,
            newly = report.counts.newly_available,
            limited = report.counts.limited_availability,
            unknown = report.counts.unknown,
            "scan complete"
        );
        Ok((report, diag))
    }

    /// Classify an existing report's spans against another registry,
    /// without rescanning. The timestamp is kept.
    pub fn reclassify(&self, report: &Report, registry: &Registry) -> Report {
        let matches: Vec<_> = report.findings.iter().map(|f| f.to_match()).collect();
        let findings = self.classifier.classify_all(&matches, registry);
        aggregate(findings, report.timestamp, registry.version())
    }

    /// Anchor a finding (or match) in the current document snapshot.
    pub fn resolve<S: TextSpan + ?Sized>(
        &self,
        span: &S,
        snapshot: &DocumentSnapshot,
    ) -> Result<Anchor, ResolveError> {
        self.resolver.resolve(span, snapshot)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(&BaselineConfig::default())
    }
}
