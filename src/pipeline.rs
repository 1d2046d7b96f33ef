//! The report pipeline
//!
//! Collect, then report, then notify. Control flows strictly forward: a
//! fatal report failure skips delivery, and a delivery failure never touches
//! the report already on disk.

use crate::config::Config;
use crate::error::Result;
use crate::notify::Notifier;
use crate::report::write_report;
use crate::source::{PrSource, collect_open_prs};
use crate::types::{DeliveryStatus, RunOutcome};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Per-run options, from the command line
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Where to write the report file
    pub output: PathBuf,
    /// Send a "nothing to report" notice when no pull requests are open
    pub notify_when_empty: bool,
}

/// Run the full pipeline once.
///
/// `notifier` is `None` for dry runs; the report is still written but no
/// delivery is attempted. Returns `Err` only for fatal report-build
/// failures: per-repository fetch failures and delivery failures are
/// recovered and surfaced in the [`RunOutcome`].
pub async fn run(
    config: &Config,
    source: &dyn PrSource,
    notifier: Option<&dyn Notifier>,
    options: &RunOptions,
) -> Result<RunOutcome> {
    let mut outcome = collect_open_prs(source, &config.repos).await;
    outcome.skipped.clone_from(&config.skipped_repos);

    for failure in &outcome.failures {
        warn!(repo = %failure.repo, reason = %failure.reason, "repository fetch failed");
    }
    info!(
        records = outcome.records.len(),
        repos = config.repos.len(),
        failures = outcome.failures.len(),
        "collection finished"
    );

    if outcome.records.is_empty() {
        info!("no open pull requests across monitored repositories");
        let delivery = match notifier {
            Some(notifier) if options.notify_when_empty => {
                send_empty_notice(notifier, config).await
            }
            Some(_) => DeliveryStatus::Skipped("nothing to report".to_string()),
            None => DeliveryStatus::Skipped("dry run".to_string()),
        };
        return Ok(RunOutcome {
            record_count: 0,
            fetch_failures: outcome.failures,
            report: None,
            delivery,
        });
    }

    // Fatal on failure: delivery must never see a partial report.
    write_report(&outcome.records, &options.output)?;

    let delivery = match notifier {
        None => {
            info!("dry run, skipping delivery");
            DeliveryStatus::Skipped("dry run".to_string())
        }
        Some(notifier) => {
            let repos = config
                .repos
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let subject = "Daily Open PR Report";
            let body = format!(
                "Please find attached the daily report of open pull requests for: {repos}."
            );
            match notifier.send_report(&options.output, subject, &body).await {
                Ok(()) => DeliveryStatus::Sent,
                Err(err) => {
                    error!(report = %options.output.display(), %err, "delivery failed");
                    DeliveryStatus::Failed(err.to_string())
                }
            }
        }
    };

    Ok(RunOutcome {
        record_count: outcome.records.len(),
        fetch_failures: outcome.failures,
        report: Some(options.output.clone()),
        delivery,
    })
}

async fn send_empty_notice(notifier: &dyn Notifier, config: &Config) -> DeliveryStatus {
    let repos = config
        .repos
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let body = format!("No open pull requests today across monitored repositories: {repos}.");
    match notifier
        .send_notice("Daily Open PR Report - No Open PRs", &body)
        .await
    {
        Ok(()) => DeliveryStatus::Sent,
        Err(err) => {
            error!(%err, "empty-run notice failed");
            DeliveryStatus::Failed(err.to_string())
        }
    }
}
