//! Verdict aggregation: an ordered provider chain with a short-circuit
//! fallback rule.
//!
//! The public entry point is [`verify_email`]: syntax first, then
//! Hunter.io, Abstract and MailboxLayer in priority order. The first
//! conclusive answer (Valid or Invalid) stops the chain; Unknown and
//! Error fall through to the next provider.

mod types;

pub use types::{Verdict, VerdictStatus, VerifyOptions};

use tracing::debug;

use crate::config::ApiCredentials;
use crate::providers::{
    AbstractClient, HttpTransport, HunterClient, MailboxLayerClient, Provider, ProviderResult,
    SyntaxCheck, TransportError,
};

/// Verify one address against the provider chain.
///
/// With `options.skip_apis` the chain holds only the local syntax check
/// and no HTTP transport is constructed, so no network call can happen.
pub fn verify_email(
    email: &str,
    credentials: &ApiCredentials,
    options: &VerifyOptions,
) -> Result<Verdict, TransportError> {
    let syntax = SyntaxCheck::new(options.mode);
    if options.skip_apis {
        return Ok(run_chain(&[&syntax], email));
    }

    let transport = HttpTransport::new()?;
    let hunter = HunterClient::new(credentials.hunter.as_deref(), &transport);
    let abstract_api = AbstractClient::new(credentials.abstract_api.as_deref(), &transport);
    let mailboxlayer = MailboxLayerClient::new(credentials.mailboxlayer.as_deref(), &transport);
    let chain: [&dyn Provider; 4] = [&syntax, &hunter, &abstract_api, &mailboxlayer];
    Ok(run_chain(&chain, email))
}

/// Consult `providers` in order, recording every result, stopping at the
/// first conclusive one.
pub(crate) fn run_chain(providers: &[&dyn Provider], email: &str) -> Verdict {
    let email = email.trim();
    let mut details: Vec<ProviderResult> = Vec::with_capacity(providers.len());

    for provider in providers {
        debug!(provider = %provider.kind(), "consulting provider");
        let result = provider.attempt(email);
        debug!(provider = %result.provider, status = %result.status, "provider answered");
        let conclusive = result.status.is_conclusive();
        details.push(result);
        if conclusive {
            break;
        }
    }

    Verdict::from_details(email, details)
}
