use anyhow::{Context, Result, bail};

use mailvet_lib::{ApiCredentials, VerifyOptions, verify_email};

use crate::args::{Cli, mode_from_str};
use crate::output;
#[cfg(feature = "with-mx")]
use crate::output::MxSummary;

pub fn run(cli: &Cli, credentials: &ApiCredentials) -> Result<()> {
    let Some(email) = cli.email.as_deref() else {
        bail!("the EMAIL argument is required for verification mode");
    };

    let options = VerifyOptions {
        skip_apis: cli.no_apis,
        mode: mode_from_str(&cli.mode),
    };

    let verdict = verify_email(email, credentials, &options).context("verification failed")?;

    let report = output::VerdictReport {
        verdict: &verdict,
        #[cfg(feature = "with-mx")]
        mx: resolve_mx(cli, &verdict.email),
    };
    output::write_verdict(&report, cli)
}

/// MX annotation for the verified address. Skipped in `--no-apis` mode:
/// a DNS query is a network call too.
#[cfg(feature = "with-mx")]
fn resolve_mx(cli: &Cli, email: &str) -> Option<MxSummary> {
    if !cli.mx || cli.no_apis {
        return None;
    }
    let candidate = mailvet_lib::parse_candidate(email).ok()?;
    let summary = match mailvet_lib::check_mx(&candidate.ascii_domain) {
        Ok(lookup) => MxSummary::from_lookup(&lookup),
        Err(err) => MxSummary::from_error(&candidate.ascii_domain, &err),
    };
    Some(summary)
}
