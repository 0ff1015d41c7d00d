//! MailboxLayer client. The current endpoint authenticates through an
//! `apikey` header; when it cannot be reached the legacy `apilayer.net`
//! endpoint with an `access_key` query parameter is tried once.

use serde_json::Value;
use tracing::debug;

use super::transport::{ApiRequest, FetchJson};
use super::types::{ProviderKind, ProviderResult, ProviderStatus};
use super::{Provider, raw_confidence};

const CURRENT_URL: &str = "https://api.apilayer.com/email_verification/check";
const LEGACY_URL: &str = "https://apilayer.net/api/check";

pub(crate) struct MailboxLayerClient<'a, T> {
    api_key: Option<&'a str>,
    transport: &'a T,
}

impl<'a, T: FetchJson> MailboxLayerClient<'a, T> {
    pub(crate) fn new(api_key: Option<&'a str>, transport: &'a T) -> Self {
        Self { api_key, transport }
    }
}

impl<T: FetchJson> Provider for MailboxLayerClient<'_, T> {
    fn kind(&self) -> ProviderKind {
        ProviderKind::MailboxLayer
    }

    fn attempt(&self, email: &str) -> ProviderResult {
        let Some(api_key) = self.api_key else {
            return ProviderResult::missing_key(ProviderKind::MailboxLayer);
        };

        let current = ApiRequest {
            url: CURRENT_URL,
            query: &[("email", email), ("smtp", "1"), ("format", "1")],
            headers: &[("apikey", api_key)],
        };
        match self.transport.fetch_json(&current) {
            Ok(payload) => return classify(payload),
            Err(err) => {
                debug!(error = %err, "current MailboxLayer endpoint failed, trying legacy");
            }
        }

        let legacy = ApiRequest {
            url: LEGACY_URL,
            query: &[
                ("access_key", api_key),
                ("email", email),
                ("smtp", "1"),
                ("format", "1"),
            ],
            headers: &[],
        };
        match self.transport.fetch_json(&legacy) {
            Ok(payload) => classify(payload),
            Err(err) => ProviderResult::error(ProviderKind::MailboxLayer, err.to_string()),
        }
    }
}

/// Map a MailboxLayer payload onto a [`ProviderResult`]. The verdict needs
/// the full `format_valid` + `mx_found` + `smtp_check` triplet to be
/// conclusive; a missing MX record alone is already conclusive.
fn classify(payload: Value) -> ProviderResult {
    // The legacy endpoint reports failures as 200 + success:false.
    if payload.get("success").and_then(Value::as_bool) == Some(false) {
        let detail = payload
            .pointer("/error/info")
            .and_then(Value::as_str)
            .unwrap_or("provider reported failure")
            .to_string();
        return ProviderResult::error(ProviderKind::MailboxLayer, detail).with_raw(payload);
    }

    let format_valid = payload
        .get("format_valid")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let mx_found = payload
        .get("mx_found")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let smtp_check = payload.get("smtp_check").and_then(Value::as_bool);
    let confidence = raw_confidence(payload.get("score"));

    let (status, detail) = if format_valid && mx_found && smtp_check == Some(true) {
        (ProviderStatus::Valid, "deliverable (SMTP ok)")
    } else if format_valid && mx_found && smtp_check == Some(false) {
        (ProviderStatus::Invalid, "undeliverable (SMTP)")
    } else if !mx_found {
        (ProviderStatus::Invalid, "no MX")
    } else {
        (ProviderStatus::Unknown, "unknown/risky")
    };

    ProviderResult::new(ProviderKind::MailboxLayer, status, detail)
        .with_confidence(confidence)
        .with_raw(payload)
}
