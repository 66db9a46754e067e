//! Scan session tests: debounce, unchanged-text skip, in-flight coalescing.

use std::sync::Arc;
use std::time::{Duration, Instant};

use baseline_analysis::engine::{EditOutcome, ScanSession};
use baseline_analysis::registry::{Category, FeatureDescriptor, SupportStatus};
use baseline_analysis::{FindingStatus, Registry, Scanner};
use baseline_core::config::SessionConfig;
use baseline_core::errors::ScanError;

fn scanner() -> Scanner {
    Scanner::default().with_registry(Arc::new(Registry::builtin().unwrap()))
}

#[test]
fn test_debounce_waits_for_quiet_period() {
    let mut session = ScanSession::new(SessionConfig::default());
    assert_eq!(session.debounce(), Duration::from_millis(1000));

    let t0 = Instant::now();
    assert!(!session.is_due(t0), "nothing pending yet");
    assert_eq!(session.note_edit("a?.b", t0), EditOutcome::Scheduled);
    assert!(!session.is_due(t0 + Duration::from_millis(500)));
    assert!(session.is_due(t0 + Duration::from_millis(1000)));

    // A later edit restarts the quiet period.
    session.note_edit("a?.b ?? c", t0 + Duration::from_millis(800));
    assert!(!session.is_due(t0 + Duration::from_millis(1000)));
    assert!(session.is_due(t0 + Duration::from_millis(1800)));
}

#[test]
fn test_custom_debounce_from_config() {
    let config = SessionConfig {
        debounce_ms: Some(250),
        ..Default::default()
    };
    let mut session = ScanSession::new(config);
    let t0 = Instant::now();
    session.note_edit("x", t0);
    assert!(session.is_due(t0 + Duration::from_millis(250)));
}

#[test]
fn test_poll_runs_only_when_due() {
    let scanner = scanner();
    let mut session = ScanSession::new(SessionConfig::default());
    let t0 = Instant::now();
    session.note_edit("a?.b", t0);

    assert!(session.poll(&scanner, t0 + Duration::from_millis(10)).unwrap().is_none());
    let report = session.poll(&scanner, t0 + Duration::from_secs(2)).unwrap().unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(session.last_text(), Some("a?.b"));
    assert!(Arc::ptr_eq(session.last_report().unwrap(), &report));
}

#[test]
fn test_unchanged_text_is_not_rescanned() {
    let scanner = scanner();
    let mut session = ScanSession::default();
    let t0 = Instant::now();

    session.note_edit("const x = a?.b;", t0);
    assert!(session.run(&scanner).unwrap().is_some());

    session.note_edit("const x = a?.b;", t0);
    assert!(session.run(&scanner).unwrap().is_none());
    assert_eq!(session.stats().scans_started, 1);
    assert_eq!(session.stats().scans_skipped_unchanged, 1);
    assert!(session.last_report().is_some(), "previous report retained");
}

#[test]
fn test_unchanged_skip_can_be_disabled() {
    let scanner = scanner();
    let config = SessionConfig {
        skip_unchanged: Some(false),
        ..Default::default()
    };
    let mut session = ScanSession::new(config);
    let t0 = Instant::now();
    session.note_edit("a?.b", t0);
    session.run(&scanner).unwrap();
    session.note_edit("a?.b", t0);
    assert!(session.run(&scanner).unwrap().is_some());
    assert_eq!(session.stats().scans_started, 2);
}

#[test]
fn test_edits_during_scan_coalesce_into_one_follow_up() {
    let scanner = scanner();
    let mut session = ScanSession::default();
    let t0 = Instant::now();

    session.note_edit("a?.b", t0);
    let ticket = session.begin_scan(&scanner).unwrap();
    assert!(session.is_in_flight());
    assert!(session.begin_scan(&scanner).is_none(), "second scan request while in flight is a no-op");

    for i in 0..5 {
        let text = format!("a?.b ?? c{i}");
        assert_eq!(session.note_edit(text, t0), EditOutcome::Queued);
    }
    assert_eq!(session.stats().edits_coalesced, 4);
    assert!(!session.is_due(t0 + Duration::from_secs(5)), "not due while in flight");

    let report = scanner.scan(ticket.text()).unwrap();
    let done = session.finish_scan(ticket, report);
    assert!(done.follow_up);
    assert_eq!(done.report.len(), 1);

    let ticket = session.begin_scan(&scanner).unwrap();
    assert_eq!(ticket.text(), "a?.b ?? c4", "follow-up scans the newest text");
    let report = scanner.scan(ticket.text()).unwrap();
    let done = session.finish_scan(ticket, report);
    assert!(!done.follow_up);
    assert_eq!(done.report.len(), 2);

    let stats = session.stats();
    assert_eq!(stats.edits, 6);
    assert_eq!(stats.scans_started, 2);
    assert_eq!(stats.scans_completed, 2);
}

#[test]
fn test_run_drains_follow_ups() {
    let scanner = scanner();
    let mut session = ScanSession::default();
    let t0 = Instant::now();

    session.note_edit("one ?? two", t0);
    let ticket = session.begin_scan(&scanner).unwrap();
    session.note_edit("one?.two", t0);
    let done = session.finish_scan(ticket, scanner.scan("one ?? two").unwrap());
    assert!(done.follow_up);

    let latest = session.run(&scanner).unwrap().unwrap();
    assert_eq!(latest.findings[0].feature_id, "optional-chaining");
    assert_eq!(session.last_text(), Some("one?.two"));
}

#[test]
fn test_failed_scan_keeps_text_pending() {
    let mut scanner = Scanner::default();
    let mut session = ScanSession::default();
    let t0 = Instant::now();
    session.note_edit("a?.b", t0);

    let err = session.run(&scanner).unwrap_err();
    assert!(matches!(err, ScanError::RegistryNotLoaded));
    assert!(!session.is_in_flight());
    assert_eq!(session.stats().scans_abandoned, 1);
    assert!(session.last_report().is_none());

    scanner.load_registry(Arc::new(Registry::builtin().unwrap()));
    let report = session.run(&scanner).unwrap().unwrap();
    assert_eq!(report.len(), 1);
}

#[test]
fn test_abandon_prefers_newer_edit() {
    let scanner = Scanner::default();
    let mut session = ScanSession::default();
    let t0 = Instant::now();
    session.note_edit("old", t0);
    let ticket = session.begin_scan(&scanner).unwrap();
    session.note_edit("new", t0);
    session.abandon_scan(ticket);

    let ticket = session.begin_scan(&scanner).unwrap();
    assert_eq!(ticket.text(), "new");
}

fn single_feature_registry(version: &str, status: SupportStatus) -> Arc<Registry> {
    let feature = FeatureDescriptor {
        id: "optional-chaining".to_string(),
        display_name: "Optional chaining".to_string(),
        category: Category::Javascript,
        signatures: vec!["?.".to_string()],
        status,
        description: String::new(),
        docs_url: None,
    };
    Arc::new(Registry::new(version, "2024-01-01", vec![feature]).unwrap())
}

#[test]
fn test_unchanged_text_is_rescanned_after_registry_swap() {
    let mut scanner = Scanner::default()
        .with_registry(single_feature_registry("v1", SupportStatus::LimitedAvailability));
    let mut session = ScanSession::default();
    let t0 = Instant::now();

    session.note_edit("a?.b", t0);
    let first = session.run(&scanner).unwrap().unwrap();
    assert_eq!(first.findings[0].status, FindingStatus::LimitedAvailability);

    scanner.load_registry(single_feature_registry("v2", SupportStatus::WidelyAvailable));
    session.note_edit("a?.b", t0);
    let second = session.run(&scanner).unwrap().expect("new registry forces a rescan");
    assert_eq!(second.registry_version, "v2");
    assert_eq!(second.findings[0].status, FindingStatus::WidelyAvailable);
    assert_eq!(session.last_report().unwrap().registry_version, "v2");
    assert_eq!(session.stats().scans_skipped_unchanged, 0);

    // Same text and same registry again: skipped.
    session.note_edit("a?.b", t0);
    assert!(session.run(&scanner).unwrap().is_none());
    assert_eq!(session.stats().scans_skipped_unchanged, 1);
}
