//! Error code stability tests.

use baseline_core::errors::{RegistryError, ResolveError, ScanError, UnresolvableReason};
use baseline_core::BaselineErrorCode;

#[test]
fn scan_refusal_has_its_own_code() {
    let err = ScanError::RegistryNotLoaded;
    assert_eq!(err.error_code(), "REGISTRY_NOT_LOADED");
    assert!(err.coded_message().starts_with("[REGISTRY_NOT_LOADED]"));
}

#[test]
fn every_registry_error_is_load_malformed() {
    let errors = [
        RegistryError::InvalidJson { message: "eof".into() },
        RegistryError::DuplicateId { id: "css-has".into() },
        RegistryError::EmptySignatures { id: "css-has".into() },
        RegistryError::EmptyId,
        RegistryError::InvalidDate { value: "yesterday".into(), message: "bad".into() },
    ];
    for err in &errors {
        assert_eq!(err.error_code(), "REGISTRY_LOAD_MALFORMED", "{err}");
    }
}

#[test]
fn resolve_error_exposes_reason() {
    let err = ResolveError::Unresolvable {
        feature_id: "optional-chaining".into(),
        start: 3,
        end: 5,
        reason: UnresolvableReason::TextDrift,
    };
    assert_eq!(err.reason(), UnresolvableReason::TextDrift);
    assert_eq!(err.error_code(), "UNRESOLVABLE");
    assert!(err.to_string().contains("optional-chaining"));
    assert!(err.to_string().contains("3..5"));
}
