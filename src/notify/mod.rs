//! Report delivery
//!
//! One email per run, spreadsheet attached, sent to all recipients jointly
//! over an authenticated STARTTLS submission connection.

mod smtp;

pub use smtp::SmtpNotifier;

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// A service that can deliver the run's report
///
/// Abstracts mail submission so the pipeline can be tested against a mock
/// notifier.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message with `report` attached to every recipient.
    ///
    /// Fire-and-forget: success means the submission server accepted the
    /// message, not that any recipient received it.
    async fn send_report(&self, report: &Path, subject: &str, body: &str) -> Result<()>;

    /// Deliver a body-only notice (no attachment).
    ///
    /// Used by the optional empty-run notification policy.
    async fn send_notice(&self, subject: &str, body: &str) -> Result<()>;
}
