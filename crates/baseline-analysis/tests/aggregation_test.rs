//! Classifier and aggregator tests: status lookup, unknown ids, dedup,
//! severity ordering, counts, grouping.

use chrono::{TimeZone, Utc};

use baseline_analysis::matcher::Match;
use baseline_analysis::registry::{Category, FeatureDescriptor, Registry, SupportStatus};
use baseline_analysis::report::{aggregate, Finding, FindingStatus};
use baseline_analysis::Classifier;

fn feature(id: &str, status: SupportStatus) -> FeatureDescriptor {
    FeatureDescriptor {
        id: id.to_string(),
        display_name: format!("{id} display"),
        category: Category::Javascript,
        signatures: vec![format!("sig-{id}")],
        status,
        description: format!("{id} description"),
        docs_url: Some(format!("https://example.test/{id}")),
    }
}

fn registry(version: &str) -> Registry {
    Registry::new(
        version,
        "2024-03-01",
        vec![
            feature("wide", SupportStatus::WidelyAvailable),
            feature("new", SupportStatus::NewlyAvailable),
            feature("limited", SupportStatus::LimitedAvailability),
        ],
    )
    .unwrap()
}

fn m(id: &str, start: usize, end: usize) -> Match {
    Match {
        feature_id: id.to_string(),
        start,
        end,
        matched_text: "x".repeat(end - start),
    }
}

fn classify(matches: &[Match], registry: &Registry) -> Vec<Finding> {
    Classifier::new().classify_all(matches, registry)
}

fn ts() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_classify_copies_registry_metadata() {
    let registry = registry("1");
    let finding = Classifier::new().classify(&m("new", 3, 5), &registry);
    assert_eq!(finding.status, FindingStatus::NewlyAvailable);
    assert_eq!(finding.display_name, "new display");
    assert_eq!(finding.description, "new description");
    assert_eq!(finding.category, Some(Category::Javascript));
    assert_eq!(finding.docs_url.as_deref(), Some("https://example.test/new"));
    assert_eq!(finding.to_match(), m("new", 3, 5));
}

#[test]
fn test_unknown_id_classifies_as_unknown() {
    let registry = registry("1");
    let finding = Classifier::new().classify(&m("retired-feature", 0, 4), &registry);
    assert_eq!(finding.status, FindingStatus::Unknown);
    assert_eq!(finding.display_name, "retired-feature");
    assert_eq!(finding.category, None);
    assert_eq!(finding.docs_url, None);
    assert!(finding.description.contains("retired-feature"));
}

#[test]
fn test_severity_order() {
    assert!(FindingStatus::Unknown.severity() > FindingStatus::LimitedAvailability.severity());
    assert!(FindingStatus::LimitedAvailability.severity() > FindingStatus::NewlyAvailable.severity());
    assert!(FindingStatus::NewlyAvailable.severity() > FindingStatus::WidelyAvailable.severity());
}

#[test]
fn test_report_orders_by_severity_then_position() {
    let registry = registry("1");
    let matches = vec![m("wide", 0, 2), m("new", 5, 7), m("limited", 9, 11), m("wide", 1, 3), m("gone", 20, 21)];
    let report = aggregate(classify(&matches, &registry), ts(), registry.version());

    let order: Vec<(&str, usize)> = report.findings.iter().map(|f| (f.feature_id.as_str(), f.start)).collect();
    assert_eq!(
        order,
        vec![("gone", 20), ("limited", 9), ("new", 5), ("wide", 0), ("wide", 1)]
    );
    assert_eq!(report.counts.unknown, 1);
    assert_eq!(report.counts.limited_availability, 1);
    assert_eq!(report.counts.newly_available, 1);
    assert_eq!(report.counts.widely_available, 2);
    assert_eq!(report.counts.total(), report.len());
    assert_eq!(report.registry_version, "1");
    assert_eq!(report.timestamp, ts());
}

#[test]
fn test_ties_break_on_feature_id_then_end() {
    let registry = Registry::new(
        "1",
        "2024-03-01",
        vec![
            feature("b-feature", SupportStatus::NewlyAvailable),
            feature("a-feature", SupportStatus::NewlyAvailable),
        ],
    )
    .unwrap();
    let matches = vec![m("b-feature", 4, 6), m("a-feature", 4, 9), m("a-feature", 4, 5)];
    let report = aggregate(classify(&matches, &registry), ts(), "1");
    let keys: Vec<_> = report.findings.iter().map(|f| f.key()).collect();
    assert_eq!(keys, vec![("a-feature", 4, 5), ("a-feature", 4, 9), ("b-feature", 4, 6)]);
}

#[test]
fn test_duplicate_spans_collapse() {
    let registry = registry("1");
    let matches = vec![m("wide", 0, 2), m("wide", 0, 2), m("wide", 0, 3), m("new", 0, 2)];
    let report = aggregate(classify(&matches, &registry), ts(), "1");
    assert_eq!(report.len(), 3);
    assert_eq!(report.counts.widely_available, 2);
    assert_eq!(report.counts.newly_available, 1);
}

#[test]
fn test_reaggregating_a_report_is_identity() {
    let registry = registry("1");
    let matches = vec![m("limited", 9, 11), m("wide", 0, 2), m("new", 5, 7), m("wide", 0, 2)];
    let report = aggregate(classify(&matches, &registry), ts(), "1");
    let again = aggregate(report.findings.clone(), report.timestamp, report.registry_version.clone());
    assert_eq!(again, report);
}

#[test]
fn test_empty_report() {
    let report = aggregate(Vec::new(), ts(), "1");
    assert!(report.is_empty());
    assert_eq!(report.counts.total(), 0);
    assert_eq!(report.headline(), "No web platform features detected");
    assert!(report.group_by_feature().is_empty());
}

#[test]
fn test_headline_reports_most_severe_tier() {
    let registry = registry("7");
    let headline = |ids: &[&str]| {
        let matches: Vec<Match> = ids.iter().enumerate().map(|(i, id)| m(id, i * 3, i * 3 + 2)).collect();
        aggregate(classify(&matches, &registry), ts(), "7").headline()
    };
    assert_eq!(headline(&["wide", "wide"]), "All 2 features are widely available");
    assert_eq!(headline(&["wide", "new"]), "Found 1 newly-available features");
    assert_eq!(headline(&["new", "limited", "limited"]), "Found 2 limited-availability features");
    assert_eq!(headline(&["limited", "ghost"]), "Found 1 features missing from registry 7");
}

#[test]
fn test_group_by_feature_follows_report_order() {
    let registry = registry("1");
    let matches = vec![m("wide", 0, 2), m("new", 5, 7), m("wide", 10, 12), m("new", 1, 2)];
    let report = aggregate(classify(&matches, &registry), ts(), "1");
    let groups = report.group_by_feature();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].feature_id, "new");
    assert_eq!(groups[0].display_name, "new display");
    assert_eq!(groups[0].findings.iter().map(|f| f.start).collect::<Vec<_>>(), vec![1, 5]);
    assert_eq!(groups[1].feature_id, "wide");
    assert_eq!(groups[1].status, FindingStatus::WidelyAvailable);
    assert_eq!(groups[1].findings.len(), 2);
}

#[test]
fn test_status_serializes_snake_case() {
    let json = serde_json::to_string(&FindingStatus::LimitedAvailability).unwrap();
    assert_eq!(json, "\"limited_availability\"");
    assert_eq!(FindingStatus::Unknown.to_string(), "unknown");
}
