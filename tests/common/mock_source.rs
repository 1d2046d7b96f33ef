//! Mock source and notifier for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use pr_reporter::error::{Error, Result};
use pr_reporter::notify::Notifier;
use pr_reporter::source::PrSource;
use pr_reporter::types::{PullRequestRecord, RepoId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Call record for `send_report`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReportCall {
    pub report: PathBuf,
    pub subject: String,
    pub body: String,
}

/// Call record for `send_notice`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendNoticeCall {
    pub subject: String,
    pub body: String,
}

/// Simple mock pull request source for testing
///
/// Features:
/// - Configurable responses per repository
/// - Error injection for failure path testing
/// - Call tracking for verification
#[derive(Default)]
pub struct MockSource {
    responses: Mutex<HashMap<String, Vec<PullRequestRecord>>>,
    errors: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the records returned for a repository
    pub fn with_prs(self, repo: &RepoId, records: Vec<PullRequestRecord>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(repo.to_string(), records);
        self
    }

    /// Configure a fetch failure for a repository
    pub fn with_error(self, repo: &RepoId, reason: &str) -> Self {
        self.errors
            .lock()
            .unwrap()
            .insert(repo.to_string(), reason.to_string());
        self
    }

    /// Repositories fetched, in call order
    pub fn fetched_repos(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PrSource for MockSource {
    async fn open_pull_requests(&self, repo: &RepoId) -> Result<Vec<PullRequestRecord>> {
        self.calls.lock().unwrap().push(repo.to_string());

        if let Some(reason) = self.errors.lock().unwrap().get(repo.as_str()) {
            return Err(Error::SourceFetch {
                repo: repo.to_string(),
                reason: reason.clone(),
            });
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(repo.as_str())
            .cloned()
            .unwrap_or_default())
    }
}

/// Simple mock notifier for testing
///
/// Tracks calls and supports error injection so pipeline tests can verify
/// when delivery is (and is not) attempted.
#[derive(Default)]
pub struct MockNotifier {
    report_calls: Mutex<Vec<SendReportCall>>,
    notice_calls: Mutex<Vec<SendNoticeCall>>,
    fail_with: Mutex<Option<String>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send fail with a delivery error
    pub fn failing(reason: &str) -> Self {
        let notifier = Self::default();
        *notifier.fail_with.lock().unwrap() = Some(reason.to_string());
        notifier
    }

    pub fn report_calls(&self) -> Vec<SendReportCall> {
        self.report_calls.lock().unwrap().clone()
    }

    pub fn notice_calls(&self) -> Vec<SendNoticeCall> {
        self.notice_calls.lock().unwrap().clone()
    }

    pub fn was_invoked(&self) -> bool {
        !self.report_calls().is_empty() || !self.notice_calls().is_empty()
    }

    fn check_failure(&self) -> Result<()> {
        if let Some(reason) = self.fail_with.lock().unwrap().as_ref() {
            return Err(Error::Delivery(reason.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send_report(&self, report: &Path, subject: &str, body: &str) -> Result<()> {
        self.report_calls.lock().unwrap().push(SendReportCall {
            report: report.to_path_buf(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        self.check_failure()
    }

    async fn send_notice(&self, subject: &str, body: &str) -> Result<()> {
        self.notice_calls.lock().unwrap().push(SendNoticeCall {
            subject: subject.to_string(),
            body: body.to_string(),
        });
        self.check_failure()
    }
}
