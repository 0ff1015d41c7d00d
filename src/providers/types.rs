use std::fmt;

use serde_json::Value;

/// Identity of one link in the verification chain. `Syntax` is the local,
/// network-free check; the rest are remote APIs.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Syntax,
    Hunter,
    Abstract,
    MailboxLayer,
}

impl ProviderKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Syntax => "Syntax",
            Self::Hunter => "Hunter",
            Self::Abstract => "Abstract",
            Self::MailboxLayer => "MailboxLayer",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized category of one provider answer. Valid and Invalid are
/// conclusive; Unknown and Error let the chain fall through.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStatus {
    Valid,
    Invalid,
    Unknown,
    Error,
}

impl ProviderStatus {
    pub fn is_conclusive(self) -> bool {
        matches!(self, Self::Valid | Self::Invalid)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Unknown => "unknown",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of exactly one provider attempt. Immutable once built.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResult {
    pub provider: ProviderKind,
    pub status: ProviderStatus,
    /// Normalized to 0..=1; providers reporting 0..=100 are scaled down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Short human-readable summary; carries the cause for `Error`.
    pub detail: String,
    /// Provider payload kept for diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

impl ProviderResult {
    pub(crate) fn new(
        provider: ProviderKind,
        status: ProviderStatus,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            status,
            confidence: None,
            detail: detail.into(),
            raw: None,
        }
    }

    pub(crate) fn error(provider: ProviderKind, detail: impl Into<String>) -> Self {
        Self::new(provider, ProviderStatus::Error, detail)
    }

    /// The client was never usable: no key means no request.
    pub(crate) fn missing_key(provider: ProviderKind) -> Self {
        Self::error(provider, "no API key")
    }

    pub(crate) fn with_confidence(mut self, confidence: Option<f64>) -> Self {
        self.confidence = confidence;
        self
    }

    pub(crate) fn with_raw(mut self, raw: Value) -> Self {
        self.raw = Some(raw);
        self
    }
}

/// Finding-mode input: who to look for and where.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonQuery {
    pub first_name: String,
    pub last_name: String,
    pub domain: String,
}

/// What one discovery call produced.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub enum FinderOutcome {
    Found {
        email: String,
        confidence: Option<f64>,
        sources: Vec<String>,
    },
    NotFound {
        detail: String,
    },
    Failed {
        detail: String,
    },
}

/// Result of one discovery call, tagged with the provider consulted.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct FinderReport {
    pub provider: ProviderKind,
    pub outcome: FinderOutcome,
}

impl FinderReport {
    pub fn found_email(&self) -> Option<&str> {
        match &self.outcome {
            FinderOutcome::Found { email, .. } => Some(email),
            _ => None,
        }
    }
}
