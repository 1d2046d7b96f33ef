//! Environment-sourced run configuration
//!
//! All configuration is read once at process start into an explicit [`Config`]
//! and passed by reference into each stage. Nothing re-reads the environment
//! mid-run.

use crate::error::{Error, Result};
use crate::types::RepoId;
use tracing::warn;

/// Default GitHub REST API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default mail submission host
pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";

/// Default mail submission port (STARTTLS)
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Immutable process-wide configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Repositories to poll, in configured order
    pub repos: Vec<RepoId>,
    /// Raw repository entries that were blank or malformed and skipped
    pub skipped_repos: Vec<String>,
    /// GitHub bearer token
    pub github_token: String,
    /// GitHub API base URL (override for tests and GitHub Enterprise)
    pub api_base: String,
    /// Sender address, also used as the SMTP username
    pub email_sender: String,
    /// SMTP password for the sender
    pub email_password: String,
    /// Recipient addresses
    pub recipients: Vec<String>,
    /// Mail submission host
    pub smtp_server: String,
    /// Mail submission port
    pub smtp_port: u16,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A missing access or mail credential is a startup-fatal error; no
    /// network activity happens before this returns.
    pub fn from_env() -> Result<Self> {
        let github_token = required("GITHUB_TOKEN")?;
        let email_sender = required("EMAIL_SENDER")?;
        let email_password = required("EMAIL_PASSWORD")?;

        let (repos, skipped_repos) = parse_repo_list(&optional("GITHUB_REPOS"));
        let recipients = parse_recipients(&optional("TEAM_EMAILS"));

        let smtp_server = std::env::var("SMTP_SERVER")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_string());

        let smtp_port = match std::env::var("SMTP_PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("SMTP_PORT '{raw}' is not a port number")))?,
            Err(_) => DEFAULT_SMTP_PORT,
        };

        let api_base = std::env::var("GITHUB_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map_or_else(|| DEFAULT_API_BASE.to_string(), |s| s.trim_end_matches('/').to_string());

        Ok(Self {
            repos,
            skipped_repos,
            github_token,
            api_base,
            email_sender,
            email_password,
            recipients,
            smtp_server,
            smtp_port,
        })
    }
}

fn required(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::Config(format!("{name} is not set")))
}

fn optional(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

/// Parse a comma-separated repository list into typed identifiers.
///
/// Blank entries are dropped silently; non-blank entries that are not an
/// `owner/repo` pair are dropped and returned for diagnostics.
pub fn parse_repo_list(raw: &str) -> (Vec<RepoId>, Vec<String>) {
    let mut repos = Vec::new();
    let mut skipped = Vec::new();

    for entry in raw.split(',') {
        match RepoId::parse(entry) {
            None => {}
            Some(Ok(repo)) => repos.push(repo),
            Some(Err(err)) => {
                warn!(entry = entry.trim(), %err, "skipping malformed repository entry");
                skipped.push(entry.trim().to_string());
            }
        }
    }

    (repos, skipped)
}

/// Parse a comma-separated recipient list, dropping blank entries.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|addr| !addr.is_empty())
        .map(String::from)
        .collect()
}
