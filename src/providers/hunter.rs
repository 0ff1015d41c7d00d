//! Hunter.io client: Email Verifier for the chain, Email Finder for
//! discovery mode.

use serde_json::Value;

use super::transport::{ApiRequest, FetchJson};
use super::types::{
    FinderOutcome, FinderReport, PersonQuery, ProviderKind, ProviderResult, ProviderStatus,
};
use super::{Provider, percent_confidence};

const VERIFIER_URL: &str = "https://api.hunter.io/v2/email-verifier";
const FINDER_URL: &str = "https://api.hunter.io/v2/email-finder";

pub(crate) struct HunterClient<'a, T> {
    api_key: Option<&'a str>,
    transport: &'a T,
}

impl<'a, T: FetchJson> HunterClient<'a, T> {
    pub(crate) fn new(api_key: Option<&'a str>, transport: &'a T) -> Self {
        Self { api_key, transport }
    }

    /// Ask the Email Finder for the most likely address matching `query`.
    pub(crate) fn find(&self, query: &PersonQuery) -> FinderReport {
        let Some(api_key) = self.api_key else {
            return self.finder_failure("no API key");
        };

        let request = ApiRequest {
            url: FINDER_URL,
            query: &[
                ("api_key", api_key),
                ("domain", query.domain.as_str()),
                ("first_name", query.first_name.as_str()),
                ("last_name", query.last_name.as_str()),
            ],
            headers: &[],
        };

        let payload = match self.transport.fetch_json(&request) {
            Ok(payload) => payload,
            Err(err) => return self.finder_failure(err.to_string()),
        };

        let Some(data) = payload.get("data") else {
            return self.finder_failure("no data returned");
        };

        let confidence = percent_confidence(data.get("confidence"));
        let sources = data
            .get("sources")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.get("uri").and_then(Value::as_str))
                    .filter(|uri| !uri.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let outcome = match data.get("email").and_then(Value::as_str) {
            Some(email) if !email.is_empty() => FinderOutcome::Found {
                email: email.to_string(),
                confidence,
                sources,
            },
            _ => FinderOutcome::NotFound {
                detail: "no email found".to_string(),
            },
        };

        FinderReport {
            provider: ProviderKind::Hunter,
            outcome,
        }
    }

    fn finder_failure(&self, detail: impl Into<String>) -> FinderReport {
        FinderReport {
            provider: ProviderKind::Hunter,
            outcome: FinderOutcome::Failed {
                detail: detail.into(),
            },
        }
    }
}

impl<T: FetchJson> Provider for HunterClient<'_, T> {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Hunter
    }

    fn attempt(&self, email: &str) -> ProviderResult {
        let Some(api_key) = self.api_key else {
            return ProviderResult::missing_key(ProviderKind::Hunter);
        };

        let request = ApiRequest {
            url: VERIFIER_URL,
            query: &[("api_key", api_key), ("email", email)],
            headers: &[],
        };

        let payload = match self.transport.fetch_json(&request) {
            Ok(payload) => payload,
            Err(err) => return ProviderResult::error(ProviderKind::Hunter, err.to_string()),
        };

        let Some(data) = payload.get("data") else {
            return ProviderResult::new(
                ProviderKind::Hunter,
                ProviderStatus::Unknown,
                "no data returned",
            )
            .with_raw(payload);
        };

        let confidence = percent_confidence(data.get("score"));
        let reported = data
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_lowercase();

        // accept_all mailboxes take anything; treat as inconclusive.
        let (status, detail) = match reported.as_str() {
            "valid" => (ProviderStatus::Valid, "valid".to_string()),
            "invalid" => (ProviderStatus::Invalid, "invalid".to_string()),
            "webmail" => (ProviderStatus::Valid, "webmail".to_string()),
            "disposable" => (ProviderStatus::Invalid, "disposable".to_string()),
            "accept_all" => (ProviderStatus::Unknown, "accept-all (risky)".to_string()),
            other => (
                ProviderStatus::Unknown,
                format!("unrecognized status '{other}'"),
            ),
        };

        ProviderResult::new(ProviderKind::Hunter, status, detail)
            .with_confidence(confidence)
            .with_raw(payload)
    }
}
