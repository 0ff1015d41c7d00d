//! Provider clients: one per external verification API plus the local
//! syntax check.
//!
//! Every link of the chain implements `Provider`; remote clients reach
//! the network only through the `FetchJson` seam, so tests run against a
//! stub transport. A client without an API key answers `Error` immediately
//! and never touches the transport.

mod abstract_api;
mod hunter;
mod mailboxlayer;
mod syntax;
mod transport;
mod types;

pub use transport::TransportError;
pub use types::{
    FinderOutcome, FinderReport, PersonQuery, ProviderKind, ProviderResult, ProviderStatus,
};

pub(crate) use abstract_api::AbstractClient;
pub(crate) use hunter::HunterClient;
pub(crate) use mailboxlayer::MailboxLayerClient;
pub(crate) use syntax::SyntaxCheck;
pub(crate) use transport::HttpTransport;

use serde_json::Value;

/// Capability shared by every link of the verification chain.
pub(crate) trait Provider {
    fn kind(&self) -> ProviderKind;
    fn attempt(&self, email: &str) -> ProviderResult;
}

/// A numeric score, tolerating providers that encode it as a string.
pub(crate) fn raw_confidence(value: Option<&Value>) -> Option<f64> {
    let value = value?;
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

/// Like [`raw_confidence`], but percentage scales collapse to 0..=1.
pub(crate) fn percent_confidence(value: Option<&Value>) -> Option<f64> {
    raw_confidence(value).map(|score| if score > 1.0 { score / 100.0 } else { score })
}

#[cfg(test)]
pub(crate) mod tests;
