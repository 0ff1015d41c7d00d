//! The local shape check exposed as the first link of the chain.

use crate::validator::{ValidationMode, validate_address};

use super::Provider;
use super::types::{ProviderKind, ProviderResult, ProviderStatus};

/// A broken address is conclusively Invalid; a well-formed one stays
/// Unknown so the chain goes on to consult the remote providers. Performs
/// no I/O of any kind.
pub(crate) struct SyntaxCheck {
    mode: ValidationMode,
}

impl SyntaxCheck {
    pub(crate) fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }
}

impl Provider for SyntaxCheck {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Syntax
    }

    fn attempt(&self, email: &str) -> ProviderResult {
        let report = validate_address(email, self.mode);
        if report.ok {
            ProviderResult::new(
                ProviderKind::Syntax,
                ProviderStatus::Unknown,
                "syntax ok, deliverability unverified",
            )
        } else {
            ProviderResult::new(
                ProviderKind::Syntax,
                ProviderStatus::Invalid,
                report.reasons.join("; "),
            )
        }
    }
}
