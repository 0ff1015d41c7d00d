use std::cell::Cell;

use serde_json::{Value, json};

use super::transport::{ApiRequest, FetchJson, TransportError};
use super::types::{FinderOutcome, PersonQuery, ProviderKind, ProviderStatus};
use super::{
    AbstractClient, HunterClient, MailboxLayerClient, Provider, SyntaxCheck, percent_confidence,
    raw_confidence,
};
use crate::validator::ValidationMode;

type FetchResult = Result<Value, TransportError>;
type FetchFn = dyn Fn(&ApiRequest<'_>) -> FetchResult;

pub(crate) struct StubTransport {
    calls: Cell<usize>,
    on_fetch: Box<FetchFn>,
}

impl StubTransport {
    pub(crate) fn new<F>(f: F) -> Self
    where
        F: Fn(&ApiRequest<'_>) -> FetchResult + 'static,
    {
        Self {
            calls: Cell::new(0),
            on_fetch: Box::new(f),
        }
    }

    /// A transport that must never be reached.
    pub(crate) fn unreachable() -> Self {
        Self::new(|request| panic!("unexpected network call to {}", request.url))
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl FetchJson for StubTransport {
    fn fetch_json(&self, request: &ApiRequest<'_>) -> FetchResult {
        self.calls.set(self.calls.get() + 1);
        (self.on_fetch)(request)
    }
}

fn http_status(url: &str, status: u16) -> TransportError {
    TransportError::Status {
        url: url.to_string(),
        status,
    }
}

fn query_value<'a>(request: &'a ApiRequest<'_>, name: &str) -> Option<&'a str> {
    request
        .query
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

#[test]
fn hunter_maps_reported_statuses() {
    let cases = [
        ("valid", ProviderStatus::Valid),
        ("invalid", ProviderStatus::Invalid),
        ("webmail", ProviderStatus::Valid),
        ("disposable", ProviderStatus::Invalid),
        ("accept_all", ProviderStatus::Unknown),
        ("something_new", ProviderStatus::Unknown),
    ];

    for (reported, expected) in cases {
        let reported = reported.to_string();
        let transport = StubTransport::new(move |request| {
            assert!(request.url.contains("email-verifier"));
            assert_eq!(query_value(request, "email"), Some("user@example.com"));
            Ok(json!({"data": {"status": reported.clone(), "score": 97}}))
        });
        let result = HunterClient::new(Some("k"), &transport).attempt("user@example.com");
        assert_eq!(result.provider, ProviderKind::Hunter);
        assert_eq!(result.status, expected, "status '{}'", result.detail);
        assert_eq!(result.confidence, Some(0.97));
        assert!(result.raw.is_some());
    }
}

#[test]
fn hunter_without_key_answers_error_and_skips_network() {
    let transport = StubTransport::unreachable();
    let result = HunterClient::new(None, &transport).attempt("user@example.com");
    assert_eq!(result.status, ProviderStatus::Error);
    assert!(result.detail.contains("no API key"));
    assert_eq!(transport.calls(), 0);
}

#[test]
fn hunter_transport_failure_becomes_error_result() {
    let transport = StubTransport::new(|request| Err(http_status(request.url, 500)));
    let result = HunterClient::new(Some("k"), &transport).attempt("user@example.com");
    assert_eq!(result.status, ProviderStatus::Error);
    assert!(result.detail.contains("500"), "{}", result.detail);
}

#[test]
fn hunter_payload_without_data_is_unknown() {
    let transport = StubTransport::new(|_| Ok(json!({"meta": {}})));
    let result = HunterClient::new(Some("k"), &transport).attempt("user@example.com");
    assert_eq!(result.status, ProviderStatus::Unknown);
    assert!(result.detail.contains("no data"));
}

#[test]
fn abstract_maps_deliverability_values() {
    let cases = [
        ("DELIVERABLE", ProviderStatus::Valid),
        ("UNDELIVERABLE", ProviderStatus::Invalid),
        ("RISKY", ProviderStatus::Unknown),
        ("WEIRD", ProviderStatus::Unknown),
    ];

    for (reported, expected) in cases {
        let reported = reported.to_string();
        let transport = StubTransport::new(move |request| {
            assert!(request.url.contains("abstractapi.com"));
            Ok(json!({"deliverability": reported.clone(), "quality_score": "0.90"}))
        });
        let result = AbstractClient::new(Some("k"), &transport).attempt("user@example.com");
        assert_eq!(result.status, expected);
        assert_eq!(result.confidence, Some(0.90));
    }
}

#[test]
fn abstract_without_key_answers_error() {
    let transport = StubTransport::unreachable();
    let result = AbstractClient::new(None, &transport).attempt("user@example.com");
    assert_eq!(result.status, ProviderStatus::Error);
    assert_eq!(transport.calls(), 0);
}

#[test]
fn mailboxlayer_needs_full_triplet_for_valid() {
    let transport = StubTransport::new(|_| {
        Ok(json!({
            "format_valid": true,
            "mx_found": true,
            "smtp_check": true,
            "score": 0.96,
        }))
    });
    let result = MailboxLayerClient::new(Some("k"), &transport).attempt("user@example.com");
    assert_eq!(result.status, ProviderStatus::Valid);
    assert_eq!(result.confidence, Some(0.96));
    assert_eq!(transport.calls(), 1);
}

#[test]
fn mailboxlayer_smtp_rejection_is_invalid() {
    let transport = StubTransport::new(|_| {
        Ok(json!({"format_valid": true, "mx_found": true, "smtp_check": false}))
    });
    let result = MailboxLayerClient::new(Some("k"), &transport).attempt("user@example.com");
    assert_eq!(result.status, ProviderStatus::Invalid);
}

#[test]
fn mailboxlayer_missing_mx_is_invalid() {
    let transport =
        StubTransport::new(|_| Ok(json!({"format_valid": true, "mx_found": false})));
    let result = MailboxLayerClient::new(Some("k"), &transport).attempt("user@example.com");
    assert_eq!(result.status, ProviderStatus::Invalid);
    assert!(result.detail.contains("no MX"));
}

#[test]
fn mailboxlayer_partial_payload_is_unknown() {
    let transport = StubTransport::new(|_| {
        Ok(json!({"format_valid": true, "mx_found": true, "smtp_check": null}))
    });
    let result = MailboxLayerClient::new(Some("k"), &transport).attempt("user@example.com");
    assert_eq!(result.status, ProviderStatus::Unknown);
}

#[test]
fn mailboxlayer_falls_back_to_legacy_endpoint() {
    let transport = StubTransport::new(|request| {
        if request.url.contains("apilayer.net") {
            assert_eq!(query_value(request, "access_key"), Some("k"));
            Ok(json!({"format_valid": true, "mx_found": true, "smtp_check": true}))
        } else {
            assert!(request.headers.iter().any(|(name, _)| *name == "apikey"));
            Err(http_status(request.url, 502))
        }
    });
    let result = MailboxLayerClient::new(Some("k"), &transport).attempt("user@example.com");
    assert_eq!(result.status, ProviderStatus::Valid);
    assert_eq!(transport.calls(), 2);
}

#[test]
fn mailboxlayer_reported_failure_is_provider_error() {
    let transport = StubTransport::new(|_| {
        Ok(json!({
            "success": false,
            "error": {"code": 101, "info": "invalid access key"},
        }))
    });
    let result = MailboxLayerClient::new(Some("k"), &transport).attempt("user@example.com");
    assert_eq!(result.status, ProviderStatus::Error);
    assert!(result.detail.contains("invalid access key"));
}

#[test]
fn finder_returns_candidate_with_sources() {
    let transport = StubTransport::new(|request| {
        assert!(request.url.contains("email-finder"));
        assert_eq!(query_value(request, "domain"), Some("google.com"));
        assert_eq!(query_value(request, "first_name"), Some("John"));
        assert_eq!(query_value(request, "last_name"), Some("Doe"));
        Ok(json!({
            "data": {
                "email": "john.doe@google.com",
                "confidence": 92,
                "sources": [
                    {"uri": "https://google.com/team"},
                    {"uri": "https://example.org/about"},
                    {"domain": "no-uri.example"},
                ],
            }
        }))
    });

    let report = HunterClient::new(Some("k"), &transport).find(&person_query());
    assert_eq!(report.provider, ProviderKind::Hunter);
    let FinderOutcome::Found {
        email,
        confidence,
        sources,
    } = &report.outcome
    else {
        panic!("expected a found outcome, got {:?}", report.outcome);
    };
    assert!(email.contains("google.com"));
    assert_eq!(*confidence, Some(0.92));
    assert_eq!(sources.len(), 2);
    assert_eq!(report.found_email(), Some("john.doe@google.com"));
}

#[test]
fn finder_without_candidate_is_not_found() {
    let transport = StubTransport::new(|_| Ok(json!({"data": {"email": null}})));
    let report = HunterClient::new(Some("k"), &transport).find(&person_query());
    assert!(matches!(report.outcome, FinderOutcome::NotFound { .. }));
}

#[test]
fn finder_transport_failure_is_failed_outcome() {
    let transport = StubTransport::new(|request| Err(http_status(request.url, 429)));
    let report = HunterClient::new(Some("k"), &transport).find(&person_query());
    let FinderOutcome::Failed { detail } = &report.outcome else {
        panic!("expected a failed outcome");
    };
    assert!(detail.contains("429"));
}

#[test]
fn finder_without_key_never_fabricates() {
    let transport = StubTransport::unreachable();
    let report = HunterClient::new(None, &transport).find(&person_query());
    assert!(matches!(report.outcome, FinderOutcome::Failed { .. }));
    assert_eq!(report.found_email(), None);
    assert_eq!(transport.calls(), 0);
}

#[test]
fn syntax_check_is_invalid_or_unknown_only() {
    let check = SyntaxCheck::new(ValidationMode::Strict);

    let broken = check.attempt("not-an-address");
    assert_eq!(broken.provider, ProviderKind::Syntax);
    assert_eq!(broken.status, ProviderStatus::Invalid);
    assert!(broken.detail.contains("'@'"));

    let shaped = check.attempt("alice@example.com");
    assert_eq!(shaped.status, ProviderStatus::Unknown);
}

#[test]
fn confidence_helpers_normalize_scales() {
    assert_eq!(raw_confidence(Some(&json!("0.75"))), Some(0.75));
    assert_eq!(raw_confidence(Some(&json!(0.75))), Some(0.75));
    assert_eq!(raw_confidence(Some(&json!("n/a"))), None);
    assert_eq!(raw_confidence(None), None);
    assert_eq!(percent_confidence(Some(&json!(97))), Some(0.97));
    assert_eq!(percent_confidence(Some(&json!(0.5))), Some(0.5));
}

fn person_query() -> PersonQuery {
    PersonQuery {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        domain: "google.com".to_string(),
    }
}
