//! Core types for pr-reporter

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An `owner/repo` pair identifying a source-hosting project
///
/// Constructed only via [`RepoId::parse`], which rejects blank input and
/// input without a `/` separator. Immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoId(String);

impl RepoId {
    /// Parse a raw identifier, trimming surrounding whitespace.
    ///
    /// Returns `None` for blank input; `Some(Err)` for input that is
    /// non-blank but not an `owner/repo` pair.
    pub fn parse(raw: &str) -> Option<Result<Self>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
                Some(Ok(Self(trimmed.to_string())))
            }
            _ => Some(Err(Error::Config(format!(
                "'{trimmed}' is not an owner/repo identifier"
            )))),
        }
    }

    /// Owner half of the identifier
    pub fn owner(&self) -> &str {
        self.0.split_once('/').map_or("", |(owner, _)| owner)
    }

    /// Repository half of the identifier
    pub fn repo(&self) -> &str {
        self.0.split_once('/').map_or("", |(_, repo)| repo)
    }

    /// The full `owner/repo` string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One open pull request, as collected from the upstream API
///
/// Tagged with the [`RepoId`] it was fetched under before aggregation; the
/// upstream list endpoint does not embed repository identity in each item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestRecord {
    /// Repository the record was fetched from
    pub repo: RepoId,
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Author handle, when the upstream item carried one
    ///
    /// `None` becomes a hard error at report-row construction, not here, so
    /// a single authorless item surfaces with full row context.
    pub author: Option<String>,
    /// Web URL for the PR
    pub html_url: String,
    /// When the PR was opened
    pub created_at: DateTime<Utc>,
    /// When the PR was last updated
    pub updated_at: DateTime<Utc>,
    /// PR state (always "open" for this workflow's input set)
    pub state: String,
}

/// A recovered per-repository fetch failure
#[derive(Debug, Clone)]
pub struct FetchFailure {
    /// Repository the fetch was issued for
    pub repo: RepoId,
    /// What went wrong
    pub reason: String,
}

/// What the collector produced for one run
///
/// Failures are data, not control flow: the caller decides logging and
/// exit-code policy.
#[derive(Debug, Clone, Default)]
pub struct CollectOutcome {
    /// All records, grouped by repository in input order
    pub records: Vec<PullRequestRecord>,
    /// One entry per repository that failed to fetch
    pub failures: Vec<FetchFailure>,
    /// Raw configured entries that were blank or malformed and skipped
    pub skipped: Vec<String>,
}

/// Delivery result for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The message was accepted by the submission server
    Sent,
    /// No delivery was attempted (nothing to report, or dry run)
    Skipped(String),
    /// Delivery failed; the report file on disk is untouched
    Failed(String),
}

/// Summary of one pipeline run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Number of pull request records collected
    pub record_count: usize,
    /// Per-repository fetch failures (recovered)
    pub fetch_failures: Vec<FetchFailure>,
    /// Path of the written report, when one was produced
    pub report: Option<PathBuf>,
    /// What happened at the delivery stage
    pub delivery: DeliveryStatus,
}

impl RunOutcome {
    /// Whether the run should map to a zero exit code
    ///
    /// Fetch failures alone do not fail the run; a failed delivery does.
    pub fn is_success(&self) -> bool {
        !matches!(self.delivery, DeliveryStatus::Failed(_))
    }
}
