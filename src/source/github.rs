//! GitHub source implementation

use crate::error::{Error, Result};
use crate::source::PrSource;
use crate::types::{PullRequestRecord, RepoId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GitHub source using reqwest
pub struct GitHubSource {
    client: Client,
    token: String,
    api_base: String,
}

#[derive(Deserialize)]
struct ApiPullRequest {
    number: u64,
    title: String,
    user: Option<ApiUser>,
    html_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    state: String,
}

#[derive(Deserialize)]
struct ApiUser {
    login: String,
}

impl ApiPullRequest {
    /// Project an API item into a record, stamping it with its origin.
    fn into_record(self, repo: &RepoId) -> PullRequestRecord {
        PullRequestRecord {
            repo: repo.clone(),
            number: self.number,
            title: self.title,
            author: self.user.map(|u| u.login),
            html_url: self.html_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
            state: self.state,
        }
    }
}

impl GitHubSource {
    /// Create a new GitHub source
    pub fn new(token: String, api_base: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pr-reporter/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    fn pulls_url(&self, repo: &RepoId) -> String {
        format!("{}/repos/{}/{}/pulls", self.api_base, repo.owner(), repo.repo())
    }
}

#[async_trait]
impl PrSource for GitHubSource {
    async fn open_pull_requests(&self, repo: &RepoId) -> Result<Vec<PullRequestRecord>> {
        let url = self.pulls_url(repo);
        debug!(repo = %repo, url, "listing open pull requests");

        let fetch_err = |reason: String| Error::SourceFetch {
            repo: repo.to_string(),
            reason,
        };

        let response = self
            .client
            .get(&url)
            .query(&[("state", "open")])
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| fetch_err(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| fetch_err(e.to_string()))?;

        let items: Vec<ApiPullRequest> = response
            .json()
            .await
            .map_err(|e| fetch_err(format!("malformed response: {e}")))?;

        let records = items
            .into_iter()
            .map(|item| item.into_record(repo))
            .collect();
        Ok(records)
    }
}
