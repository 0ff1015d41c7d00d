//! Local syntactic validation of email addresses.
//!
//! This never touches the network: it checks the shape of an address
//! (single `@`, length limits, label rules) and normalizes the domain via
//! IDNA. Deliverability is the business of the provider chain.

mod domain;
mod local;
mod types;

pub use types::{AddressError, EmailCandidate, ValidationMode, ValidationReport};

use domain::check_domain;
use local::check_local;

/// Check the shape of `email` under the given rule set.
pub fn validate_address(email: &str, mode: ValidationMode) -> ValidationReport {
    let input = email.trim();
    let mut reasons = Vec::new();

    if input.len() > 254 {
        reasons.push(format!("total length {} > 254", input.len()));
    }

    let Some((local, domain)) = split_once_at(input) else {
        reasons.push("must contain exactly one '@'".to_string());
        return ValidationReport { ok: false, reasons };
    };

    check_local(local, mode, &mut reasons);
    check_domain(domain, &mut reasons);

    ValidationReport {
        ok: reasons.is_empty(),
        reasons,
    }
}

/// Split `email` into an [`EmailCandidate`], normalizing the domain.
///
/// This only enforces the coarse shape (one `@`, non-empty parts, IDNA
/// convertibility); use [`validate_address`] for the full rule set.
pub fn parse_candidate(email: &str) -> Result<EmailCandidate, AddressError> {
    let input = email.trim();
    let (local, domain) = split_once_at(input).ok_or(AddressError::Shape)?;
    if local.is_empty() || domain.is_empty() {
        return Err(AddressError::EmptyPart);
    }
    let domain_lower = domain.to_lowercase();
    let ascii_domain =
        idna::domain_to_ascii(&domain_lower).map_err(|e| AddressError::Idna(e.to_string()))?;
    Ok(EmailCandidate {
        local: local.to_string(),
        domain: domain_lower,
        ascii_domain,
    })
}

/// `Some((local, domain))` when the input contains exactly one `@`.
fn split_once_at(input: &str) -> Option<(&str, &str)> {
    let mut parts = input.split('@');
    let local = parts.next()?;
    let domain = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((local, domain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_basic() {
        let r = validate_address("alice@example.com", ValidationMode::Strict);
        assert!(r.ok, "{:?}", r.reasons);
    }

    #[test]
    fn rejects_double_at() {
        let r = validate_address("alice@bob@example.com", ValidationMode::Strict);
        assert!(!r.ok);
        assert!(r.reasons.iter().any(|m| m.contains("exactly one '@'")));
    }

    #[test]
    fn rejects_missing_at() {
        assert!(!validate_address("alice.example.com", ValidationMode::Strict).ok);
    }

    #[test]
    fn relaxed_accepts_quoted_local() {
        let r = validate_address("\"alice liddell\"@example.com", ValidationMode::Relaxed);
        assert!(r.ok, "{:?}", r.reasons);
    }

    #[test]
    fn candidate_carries_ascii_domain() {
        let candidate = parse_candidate("alice@Exämple.com").expect("parses");
        assert_eq!(candidate.local, "alice");
        assert_eq!(candidate.domain, "exämple.com");
        assert_eq!(candidate.ascii_domain, "xn--exmple-cua.com");
        assert_eq!(candidate.ascii_address(), "alice@xn--exmple-cua.com");
    }

    #[test]
    fn candidate_rejects_shapeless_input() {
        assert!(matches!(
            parse_candidate("not-an-address"),
            Err(AddressError::Shape)
        ));
        assert!(matches!(parse_candidate("@example.com"), Err(AddressError::EmptyPart)));
    }

    proptest! {
        #[test]
        fn inputs_without_at_never_validate(input in "[a-z0-9 .]{0,80}") {
            prop_assume!(!input.contains('@'));
            prop_assert!(!validate_address(&input, ValidationMode::Strict).ok);
            prop_assert!(!validate_address(&input, ValidationMode::Relaxed).ok);
        }
    }
}
