//! Command-line interface for pr-reporter

use clap::Parser;
use pr_reporter::config::Config;
use pr_reporter::error::Result;
use pr_reporter::notify::{Notifier, SmtpNotifier};
use pr_reporter::pipeline::{self, RunOptions};
use pr_reporter::source::GitHubSource;
use pr_reporter::types::{DeliveryStatus, RunOutcome};
use std::path::PathBuf;
use tracing::info;

/// Collect open pull requests, write a spreadsheet report, and email it
///
/// Configuration comes from the environment: GITHUB_REPOS, GITHUB_TOKEN,
/// EMAIL_SENDER, EMAIL_PASSWORD, TEAM_EMAILS, SMTP_SERVER, SMTP_PORT.
#[derive(Debug, Parser)]
#[command(name = "pr-reporter", version, about)]
pub struct Cli {
    /// Path of the report file to write
    #[arg(long, default_value = "open_prs_report.xlsx")]
    pub output: PathBuf,

    /// Collect and write the report but skip email delivery
    #[arg(long)]
    pub dry_run: bool,

    /// Send a "no open pull requests" notice instead of skipping delivery
    /// when nothing is open
    #[arg(long)]
    pub notify_empty: bool,
}

/// Run the report pipeline from parsed arguments.
pub async fn run(args: &Cli) -> Result<RunOutcome> {
    let config = Config::from_env()?;
    info!(
        repos = config.repos.len(),
        recipients = config.recipients.len(),
        "configuration loaded"
    );

    let source = GitHubSource::new(config.github_token.clone(), config.api_base.clone())?;

    // Built before any network activity so address/credential problems
    // abort the run up front, not after the report is written.
    let notifier = if args.dry_run {
        None
    } else {
        Some(SmtpNotifier::new(&config)?)
    };
    let notifier_ref: Option<&dyn Notifier> = notifier.as_ref().map(|n| n as &dyn Notifier);

    let options = RunOptions {
        output: args.output.clone(),
        notify_when_empty: args.notify_empty,
    };

    let outcome = pipeline::run(&config, &source, notifier_ref, &options).await?;
    summarize(&outcome);
    Ok(outcome)
}

fn summarize(outcome: &RunOutcome) {
    match &outcome.delivery {
        DeliveryStatus::Sent => info!(
            records = outcome.record_count,
            "report run complete, email accepted"
        ),
        DeliveryStatus::Skipped(reason) => info!(
            records = outcome.record_count,
            reason = %reason,
            "report run complete, delivery skipped"
        ),
        DeliveryStatus::Failed(reason) => info!(
            records = outcome.record_count,
            reason = %reason,
            "report run complete, delivery failed"
        ),
    }
}
