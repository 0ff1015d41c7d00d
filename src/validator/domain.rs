/// Validate the domain: IDNA conversion plus per-label checks.
/// Invalidating reasons are pushed into `reasons`.
pub(crate) fn check_domain(domain: &str, reasons: &mut Vec<String>) {
    let ascii = match idna::domain_to_ascii(domain) {
        Ok(d) => d,
        Err(_) => {
            reasons.push("domain punycode conversion failed".to_string());
            return;
        }
    };

    if ascii.is_empty() {
        reasons.push("domain empty after IDNA conversion".to_string());
        return;
    }

    if !ascii.contains('.') {
        reasons.push("domain must contain at least one dot".to_string());
    }

    for label in ascii.split('.') {
        if label.is_empty() {
            reasons.push("empty domain label".to_string());
            continue;
        }
        if label.len() > 63 {
            reasons.push(format!("domain label '{label}' length {} > 63", label.len()));
        }
        if label.starts_with('-') || label.ends_with('-') {
            reasons.push(format!("domain label '{label}' cannot start/end with '-'"));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            reasons.push(format!("domain label '{label}' has invalid chars"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_domain_ok() {
        let mut reasons = Vec::new();
        check_domain("example.com", &mut reasons);
        assert!(reasons.is_empty(), "{reasons:?}");
    }

    #[test]
    fn dotless_domain_rejected() {
        let mut reasons = Vec::new();
        check_domain("localhost", &mut reasons);
        assert!(reasons.iter().any(|r| r.contains("at least one dot")));
    }

    #[test]
    fn hyphen_edges_rejected() {
        let mut reasons = Vec::new();
        check_domain("-bad.example.com", &mut reasons);
        assert!(!reasons.is_empty());
    }

    #[test]
    fn unicode_domain_accepted_via_idna() {
        let mut reasons = Vec::new();
        check_domain("exämple.com", &mut reasons);
        assert!(reasons.is_empty(), "{reasons:?}");
    }
}
