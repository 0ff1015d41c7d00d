//! Discovery mode: guess the most likely address for a person at a domain.

use thiserror::Error;
use tracing::debug;

use crate::config::ApiCredentials;
use crate::providers::{FinderReport, HttpTransport, HunterClient, PersonQuery, TransportError};

#[derive(Debug, Error)]
pub enum FinderError {
    /// Discovery needs Hunter.io; without its key there is nothing to
    /// consult and no address gets invented.
    #[error("no finder provider configured (set HUNTER_API_KEY)")]
    NoProviderConfigured,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Ask the configured finder provider for the most likely address
/// matching `query`.
pub fn find_email(
    query: &PersonQuery,
    credentials: &ApiCredentials,
) -> Result<FinderReport, FinderError> {
    let Some(api_key) = credentials.hunter.as_deref() else {
        return Err(FinderError::NoProviderConfigured);
    };

    debug!(domain = %query.domain, "consulting finder provider");
    let transport = HttpTransport::new()?;
    let hunter = HunterClient::new(Some(api_key), &transport);
    Ok(hunter.find(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_a_configuration_error() {
        let query = PersonQuery {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            domain: "google.com".to_string(),
        };

        let err = find_email(&query, &ApiCredentials::default()).expect_err("no provider");
        assert!(matches!(err, FinderError::NoProviderConfigured));
    }
}
