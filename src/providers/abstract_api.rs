//! Abstract API email validation client.

use serde_json::Value;

use super::transport::{ApiRequest, FetchJson};
use super::types::{ProviderKind, ProviderResult, ProviderStatus};
use super::{Provider, raw_confidence};

const ENDPOINT_URL: &str = "https://emailvalidation.abstractapi.com/v1/";

pub(crate) struct AbstractClient<'a, T> {
    api_key: Option<&'a str>,
    transport: &'a T,
}

impl<'a, T: FetchJson> AbstractClient<'a, T> {
    pub(crate) fn new(api_key: Option<&'a str>, transport: &'a T) -> Self {
        Self { api_key, transport }
    }
}

impl<T: FetchJson> Provider for AbstractClient<'_, T> {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Abstract
    }

    fn attempt(&self, email: &str) -> ProviderResult {
        let Some(api_key) = self.api_key else {
            return ProviderResult::missing_key(ProviderKind::Abstract);
        };

        let request = ApiRequest {
            url: ENDPOINT_URL,
            query: &[("api_key", api_key), ("email", email)],
            headers: &[],
        };

        let payload = match self.transport.fetch_json(&request) {
            Ok(payload) => payload,
            Err(err) => return ProviderResult::error(ProviderKind::Abstract, err.to_string()),
        };

        // quality_score is already on the 0..=1 scale.
        let confidence = raw_confidence(payload.get("quality_score"));
        let reported = payload
            .get("deliverability")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_uppercase();

        let (status, detail) = match reported.as_str() {
            "DELIVERABLE" => (ProviderStatus::Valid, "deliverable".to_string()),
            "UNDELIVERABLE" => (ProviderStatus::Invalid, "undeliverable".to_string()),
            "RISKY" => (ProviderStatus::Unknown, "risky".to_string()),
            other => (
                ProviderStatus::Unknown,
                format!("unrecognized deliverability '{other}'"),
            ),
        };

        ProviderResult::new(ProviderKind::Abstract, status, detail)
            .with_confidence(confidence)
            .with_raw(payload)
    }
}
