mod args;
mod find;
mod output;
mod verify;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::Cli;
use mailvet_lib::ApiCredentials;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let credentials = ApiCredentials::from_env();

    if cli.find {
        find::run(&cli, &credentials)
    } else {
        verify::run(&cli, &credentials)
    }
}
