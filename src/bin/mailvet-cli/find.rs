use anyhow::{Context, Result, bail};

use mailvet_lib::{ApiCredentials, PersonQuery, find_email};

use crate::args::Cli;
use crate::output;

pub fn run(cli: &Cli, credentials: &ApiCredentials) -> Result<()> {
    let (Some(domain), Some(first_name), Some(last_name)) = (
        cli.domain.as_deref(),
        cli.first_name.as_deref(),
        cli.last_name.as_deref(),
    ) else {
        bail!("--find requires --domain, --first-name and --last-name");
    };

    let query = PersonQuery {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        domain: domain.to_string(),
    };

    let report = find_email(&query, credentials).context("email finding failed")?;
    output::write_finder(&report, &query, cli)
}
