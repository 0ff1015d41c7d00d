//! Provider credentials, resolved once at startup and passed by reference.

use std::env;

pub const HUNTER_API_KEY_VAR: &str = "HUNTER_API_KEY";
pub const ABSTRACT_API_KEY_VAR: &str = "ABSTRACT_API_KEY";
pub const MAILBOXLAYER_API_KEY_VAR: &str = "MAILBOXLAYER_API_KEY";

/// API keys for the remote providers. A missing key disables that provider
/// without failing the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiCredentials {
    pub hunter: Option<String>,
    pub abstract_api: Option<String>,
    pub mailboxlayer: Option<String>,
}

impl ApiCredentials {
    /// Read the provider keys from the environment. Blank values count as
    /// unset.
    pub fn from_env() -> Self {
        Self {
            hunter: read_key(HUNTER_API_KEY_VAR),
            abstract_api: read_key(ABSTRACT_API_KEY_VAR),
            mailboxlayer: read_key(MAILBOXLAYER_API_KEY_VAR),
        }
    }

    /// True when no remote provider has a key.
    pub fn is_empty(&self) -> bool {
        self.hunter.is_none() && self.abstract_api.is_none() && self.mailboxlayer.is_none()
    }
}

fn read_key(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
