use clap::Parser;
use mailvet_lib::ValidationMode;

#[derive(Parser)]
#[command(
    name = "mailvet-cli",
    about = "Verify email deliverability via provider APIs, or find an address from a name and domain."
)]
pub struct Cli {
    /// email address to verify (verification mode)
    pub email: Option<String>,

    /// skip the provider APIs; only run the local syntax check
    #[arg(long)]
    pub no_apis: bool,

    /// find an address instead of verifying (requires --domain, --first-name, --last-name)
    #[arg(long)]
    pub find: bool,

    /// domain to search (finding mode)
    #[arg(long)]
    pub domain: Option<String>,

    /// first name to search (finding mode)
    #[arg(long)]
    pub first_name: Option<String>,

    /// last name to search (finding mode)
    #[arg(long)]
    pub last_name: Option<String>,

    /// mode: strict|relaxed
    #[arg(long, default_value = "strict")]
    pub mode: String,

    /// format: human|json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// write the JSON report to a file instead of stdout
    #[arg(long)]
    pub out: Option<String>,

    /// resolve the domain's MX records as well (feature `with-mx`)
    #[cfg(feature = "with-mx")]
    #[arg(long)]
    pub mx: bool,
}

pub fn mode_from_str(s: &str) -> ValidationMode {
    match s {
        "relaxed" => ValidationMode::Relaxed,
        _ => ValidationMode::Strict,
    }
}
