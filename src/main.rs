use anyhow::Result;
use clap::Parser;
use paco_output::cli::Cli;
use paco_output::{DEFAULT_LOG_FILTER, LOG_ENV};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    paco_output::run(cli)
}
