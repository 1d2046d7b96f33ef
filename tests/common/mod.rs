//! Shared test fixtures

#![allow(dead_code)]

mod mock_source;

pub use mock_source::{MockNotifier, MockSource, SendNoticeCall, SendReportCall};

use chrono::{TimeZone, Utc};
use pr_reporter::config::{Config, DEFAULT_API_BASE, DEFAULT_SMTP_PORT, DEFAULT_SMTP_SERVER};
use pr_reporter::types::{PullRequestRecord, RepoId};

/// Parse an `owner/repo` fixture identifier
pub fn repo(name: &str) -> RepoId {
    RepoId::parse(name).expect("non-blank fixture repo").unwrap()
}

/// Build a synthetic open pull request record
pub fn make_record(repo_name: &str, number: u64) -> PullRequestRecord {
    PullRequestRecord {
        repo: repo(repo_name),
        number,
        title: format!("Change number {number}"),
        author: Some(format!("user-{number}")),
        html_url: format!("https://github.com/{repo_name}/pull/{number}"),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 2, 8, 30, 0).unwrap(),
        state: "open".to_string(),
    }
}

/// Build a run configuration without touching the environment
pub fn test_config(repos: &[&str]) -> Config {
    Config {
        repos: repos.iter().map(|r| repo(r)).collect(),
        skipped_repos: Vec::new(),
        github_token: "test-token".to_string(),
        api_base: DEFAULT_API_BASE.to_string(),
        email_sender: "sender@example.com".to_string(),
        email_password: "hunter2".to_string(),
        recipients: vec!["team@example.com".to_string()],
        smtp_server: DEFAULT_SMTP_SERVER.to_string(),
        smtp_port: DEFAULT_SMTP_PORT,
    }
}
