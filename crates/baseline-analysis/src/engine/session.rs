//! Caller-owned scan session.
//!
//! Tracks the latest edited text, the last scanned text and its report, and
//! whether a scan is in flight. One scan runs at a time and runs to
//! completion. Edits that land while a scan is in flight are coalesced into a
//! single follow-up scan of the newest text.
//!
//! The session holds no timers: the caller reports edits and polls
//! [`ScanSession::is_due`] with its own `Instant`s.

use std::sync::Arc;
use std::time::{Duration, Instant};

use xxhash_rust::xxh3::xxh3_64;

use baseline_core::config::SessionConfig;
use baseline_core::errors::ScanError;

use crate::report::Report;

use super::scanner::Scanner;

/// What happened to an edit signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// No scan in flight; a scan becomes due once the debounce elapses.
    Scheduled,
    /// A scan is in flight; one follow-up scan is queued.
    Queued,
}

/// Proof that a scan was started. Consumed by [`ScanSession::finish_scan`]
/// or [`ScanSession::abandon_scan`].
#[derive(Debug)]
pub struct ScanTicket {
    text: String,
    hash: u64,
}

impl ScanTicket {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Result of finishing a scan.
#[derive(Debug, Clone)]
pub struct ScanCompletion {
    pub report: Arc<Report>,
    /// Edits arrived during the scan; start exactly one more.
    pub follow_up: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub edits: usize,
    pub scans_started: usize,
    pub scans_completed: usize,
    pub scans_abandoned: usize,
    pub scans_skipped_unchanged: usize,
    /// Edits folded into an already-queued follow-up scan.
    pub edits_coalesced: usize,
}

#[derive(Debug, Default)]
pub struct ScanSession {
    config: SessionConfig,
    pending_text: Option<String>,
    last_edit_at: Option<Instant>,
    last_text: Option<String>,
    last_hash: Option<u64>,
    last_report: Option<Arc<Report>>,
    in_flight: bool,
    rescan_queued: bool,
    stats: SessionStats,
}

impl ScanSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn debounce(&self) -> Duration {
        self.config.effective_debounce()
    }

    /// Record an edit. The newest text always replaces any pending text.
    pub fn note_edit(&mut self, text: impl Into<String>, at: Instant) -> EditOutcome {
        self.stats.edits += 1;
        self.pending_text = Some(text.into());
        self.last_edit_at = Some(at);

        if !self.in_flight {
            return EditOutcome::Scheduled;
        }
        if self.rescan_queued {
            self.stats.edits_coalesced += 1;
        }
        self.rescan_queued = true;
        EditOutcome::Queued
    }

    /// Whether pending text has settled for the debounce interval.
    pub fn is_due(&self, now: Instant) -> bool {
        if self.in_flight || self.pending_text.is_none() {
            return false;
        }
        match self.last_edit_at {
            Some(at) => now.saturating_duration_since(at) >= self.debounce(),
            None => true,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start a scan of the pending text with `scanner`.
    ///
    /// Returns `None` when a scan is already in flight (the request is a
    /// no-op; the queued follow-up covers it), when nothing is pending, or
    /// when the pending text equals the last scanned text and the last report
    /// was classified against the scanner's current registry.
    pub fn begin_scan(&mut self, scanner: &Scanner) -> Option<ScanTicket> {
        if self.in_flight {
            return None;
        }
        let text = self.pending_text.take()?;
        let hash = xxh3_64(text.as_bytes());

        if self.config.effective_skip_unchanged()
            && self.last_hash == Some(hash)
            && self.last_text.as_deref() == Some(text.as_str())
            && self.report_is_current(scanner)
        {
            self.stats.scans_skipped_unchanged += 1;
            tracing::trace!("text unchanged since last scan, skipping");
            return None;
        }

        self.in_flight = true;
        self.rescan_queued = false;
        self.stats.scans_started += 1;
        Some(ScanTicket { text, hash })
    }

    /// Whether the last report came from the registry `scanner` has installed.
    fn report_is_current(&self, scanner: &Scanner) -> bool {
        match (&self.last_report, scanner.registry()) {
            (Some(report), Some(registry)) => report.registry_version == registry.version(),
            _ => false,
        }
    }

    /// Complete the in-flight scan with its report.
    pub fn finish_scan(&mut self, ticket: ScanTicket, report: Report) -> ScanCompletion {
        let report = Arc::new(report);
        self.in_flight = false;
        self.last_text = Some(ticket.text);
        self.last_hash = Some(ticket.hash);
        self.last_report = Some(Arc::clone(&report));
        self.stats.scans_completed += 1;

        let follow_up = std::mem::take(&mut self.rescan_queued) && self.pending_text.is_some();
        ScanCompletion { report, follow_up }
    }

    /// Give up on the in-flight scan (the scan itself failed). Its text is
    /// put back as pending unless a newer edit already replaced it.
    pub fn abandon_scan(&mut self, ticket: ScanTicket) {
        self.in_flight = false;
        self.rescan_queued = false;
        self.stats.scans_abandoned += 1;
        if self.pending_text.is_none() {
            self.pending_text = Some(ticket.text);
        }
    }

    /// Run the pending scan and any follow-ups to completion.
    ///
    /// Returns the newest report, or `None` if nothing needed scanning.
    pub fn run(&mut self, scanner: &Scanner) -> Result<Option<Arc<Report>>, ScanError> {
        let mut latest = None;
        while let Some(ticket) = self.begin_scan(scanner) {
            match scanner.scan(ticket.text()) {
                Ok(report) => {
                    let completion = self.finish_scan(ticket, report);
                    latest = Some(completion.report);
                    if !completion.follow_up {
                        break;
                    }
                }
                Err(e) => {
                    self.abandon_scan(ticket);
                    return Err(e);
                }
            }
        }
        Ok(latest)
    }

    /// Run only if the debounce interval has elapsed at `now`.
    pub fn poll(
        &mut self,
        scanner: &Scanner,
        now: Instant,
    ) -> Result<Option<Arc<Report>>, ScanError> {
        if !self.is_due(now) {
            return Ok(None);
        }
        self.run(scanner)
    }

    pub fn last_report(&self) -> Option<&Arc<Report>> {
        self.last_report.as_ref()
    }

    pub fn last_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}
