use trust_dns_resolver::error::ResolveError;

use super::{MxRecord, resolver};

type LookupResult = Result<Vec<MxRecord>, ResolveError>;
type LookupFn = dyn Fn(&str) -> LookupResult;

pub(crate) struct StubResolver {
    pub on_lookup: Box<LookupFn>,
}

impl StubResolver {
    fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> LookupResult + 'static,
    {
        Self {
            on_lookup: Box::new(f),
        }
    }
}

#[test]
fn normalize_domain_rejects_empty() {
    let err = resolver::normalize_domain("  ").expect_err("empty domain should fail");
    assert!(matches!(err, super::Error::EmptyDomain));
}

#[test]
fn normalize_domain_converts_unicode() {
    let ascii = resolver::normalize_domain("exämple.com").expect("converts");
    assert_eq!(ascii, "xn--exmple-cua.com");
}

#[test]
fn lookup_sorts_and_dedups_so_primary_is_best() {
    let stub = StubResolver::new(|domain| {
        assert_eq!(domain, "example.com");
        Ok(vec![
            MxRecord::new(20, "mx2.example.com"),
            MxRecord::new(10, "mx1.example.com"),
            MxRecord::new(10, "mx1.example.com"),
            MxRecord::new(30, "mx3.example.com"),
        ])
    });

    let lookup =
        resolver::lookup_with(&stub, "example.com".to_string()).expect("lookup succeeds");
    assert_eq!(lookup.records.len(), 3);
    assert!(lookup.has_records());
    let primary = lookup.primary().expect("records present");
    assert_eq!(primary.preference, 10);
    assert_eq!(primary.exchange, "mx1.example.com");
}

#[test]
fn lookup_without_records_has_no_primary() {
    let stub = StubResolver::new(|_| Ok(Vec::new()));

    let lookup =
        resolver::lookup_with(&stub, "example.com".to_string()).expect("lookup succeeds");
    assert!(!lookup.has_records());
    assert!(lookup.primary().is_none());
}
