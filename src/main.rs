//! pr-reporter binary entry point

mod cli;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code for a fatal report or delivery failure
const EXIT_RUN_FAILED: u8 = 1;

/// Exit code for a startup configuration error
const EXIT_CONFIG: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();

    match cli::run(&args).await {
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_RUN_FAILED),
        Err(err) => {
            tracing::error!(%err, "run aborted");
            eprintln!("error: {err}");
            match err {
                pr_reporter::Error::Config(_) => ExitCode::from(EXIT_CONFIG),
                _ => ExitCode::from(EXIT_RUN_FAILED),
            }
        }
    }
}
