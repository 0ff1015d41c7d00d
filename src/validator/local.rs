use super::ValidationMode;

const ATEXT_SYMBOLS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Strict rules: ASCII atext plus non-initial/non-terminal dots, no "..".
pub(crate) fn check_local(local: &str, mode: ValidationMode, reasons: &mut Vec<String>) {
    if local.is_empty() || local.len() > 64 {
        reasons.push(format!("local part length {} invalid (1..=64)", local.len()));
        return;
    }

    // Relaxed additionally accepts a simple quoted-string form.
    if mode == ValidationMode::Relaxed && is_quoted(local) {
        return;
    }

    if local.starts_with('.') || local.ends_with('.') {
        reasons.push("local part cannot start or end with '.'".to_string());
    }
    if local.contains("..") {
        reasons.push("local part cannot contain consecutive dots".to_string());
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || ATEXT_SYMBOLS.contains(c))
    {
        reasons.push(match mode {
            ValidationMode::Strict => "invalid local part (strict rules)".to_string(),
            ValidationMode::Relaxed => "invalid local part (relaxed rules)".to_string(),
        });
    }
}

fn is_quoted(local: &str) -> bool {
    local.len() >= 2 && local.starts_with('"') && local.ends_with('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reasons_for(local: &str, mode: ValidationMode) -> Vec<String> {
        let mut reasons = Vec::new();
        check_local(local, mode, &mut reasons);
        reasons
    }

    #[test]
    fn plain_atext_passes_strict() {
        assert!(reasons_for("john.doe+tag", ValidationMode::Strict).is_empty());
    }

    #[test]
    fn leading_dot_rejected() {
        assert!(!reasons_for(".john", ValidationMode::Strict).is_empty());
    }

    #[test]
    fn quoted_string_needs_relaxed() {
        assert!(!reasons_for("\"john doe\"", ValidationMode::Strict).is_empty());
        assert!(reasons_for("\"john doe\"", ValidationMode::Relaxed).is_empty());
    }

    #[test]
    fn overlong_local_rejected() {
        let local = "a".repeat(65);
        assert!(!reasons_for(&local, ValidationMode::Strict).is_empty());
    }
}
