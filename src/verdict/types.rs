use std::fmt;

use crate::providers::{ProviderKind, ProviderResult, ProviderStatus};
use crate::validator::ValidationMode;

/// Final combined status of a verification request.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictStatus {
    Valid,
    Invalid,
    Unknown,
}

impl VerdictStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Knobs for [`verify_email`](crate::verdict::verify_email).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Keep the chain local-only; no HTTP transport is constructed.
    pub skip_apis: bool,
    /// Local-part rule set for the syntax link.
    pub mode: ValidationMode,
}

/// One verification request collapsed into a single answer, with the
/// sequence of provider results that produced it.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub email: String,
    pub status: VerdictStatus,
    /// The last provider with a conclusive answer, or the last one
    /// attempted when every answer was inconclusive.
    pub deciding_provider: ProviderKind,
    /// Exactly the providers invoked, in invocation order.
    pub details: Vec<ProviderResult>,
}

impl Verdict {
    pub(crate) fn from_details(email: &str, details: Vec<ProviderResult>) -> Self {
        let deciding = details
            .iter()
            .rev()
            .find(|result| result.status.is_conclusive())
            .or_else(|| details.last());

        let (deciding_provider, status) = match deciding {
            Some(result) => (
                result.provider,
                match result.status {
                    ProviderStatus::Valid => VerdictStatus::Valid,
                    ProviderStatus::Invalid => VerdictStatus::Invalid,
                    ProviderStatus::Unknown | ProviderStatus::Error => VerdictStatus::Unknown,
                },
            ),
            // An empty chain decides nothing; callers never build one.
            None => (ProviderKind::Syntax, VerdictStatus::Unknown),
        };

        Self {
            email: email.to_string(),
            status,
            deciding_provider,
            details,
        }
    }

    /// The detail entry of the deciding provider.
    pub fn deciding_result(&self) -> Option<&ProviderResult> {
        self.details
            .iter()
            .rev()
            .find(|result| result.provider == self.deciding_provider)
    }
}
