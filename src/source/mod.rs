//! Pull request sources
//!
//! Provides the collector stage: one authenticated read per configured
//! repository, with per-repository failures recovered locally.

mod github;

pub use github::GitHubSource;

use crate::error::Result;
use crate::types::{CollectOutcome, FetchFailure, PullRequestRecord, RepoId};
use async_trait::async_trait;
use tracing::{debug, warn};

/// A service that can list the open pull requests of one repository
///
/// Abstracts the hosting API so the collector and pipeline can be tested
/// against a mock source.
#[async_trait]
pub trait PrSource: Send + Sync {
    /// Fetch all open pull requests for `repo`, each record already tagged
    /// with `repo` as its origin.
    async fn open_pull_requests(&self, repo: &RepoId) -> Result<Vec<PullRequestRecord>>;
}

/// Collect open pull requests from every repository, sequentially.
///
/// A failure fetching one repository never aborts the run or omits other
/// repositories' results: it contributes a [`FetchFailure`] and zero records,
/// and iteration continues. Records stay grouped by repository in input
/// order, preserving the upstream API's ordering within each repository.
pub async fn collect_open_prs(source: &dyn PrSource, repos: &[RepoId]) -> CollectOutcome {
    let mut outcome = CollectOutcome::default();

    for repo in repos {
        debug!(repo = %repo, "fetching open pull requests");
        match source.open_pull_requests(repo).await {
            Ok(records) => {
                debug!(repo = %repo, count = records.len(), "fetched open pull requests");
                outcome.records.extend(records);
            }
            Err(err) => {
                warn!(repo = %repo, %err, "fetch failed, continuing with remaining repositories");
                outcome.failures.push(FetchFailure {
                    repo: repo.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    outcome
}
