//! Error types for pr-reporter

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across the report pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid configuration, detected before any network activity
    #[error("configuration error: {0}")]
    Config(String),

    /// A per-repository fetch failure (recovered by the collector)
    #[error("failed to fetch pull requests for '{repo}': {reason}")]
    SourceFetch {
        /// Repository the fetch was issued for
        repo: String,
        /// What went wrong
        reason: String,
    },

    /// Failure building rows or writing the report file (fatal to the run)
    #[error("failed to build report: {0}")]
    ReportBuild(String),

    /// Failure attaching, connecting, authenticating, or transmitting the email
    #[error("failed to deliver report: {0}")]
    Delivery(String),
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::ReportBuild(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::ReportBuild(err.to_string())
    }
}

impl From<lettre::error::Error> for Error {
    fn from(err: lettre::error::Error) -> Self {
        Self::Delivery(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for Error {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Self::Delivery(err.to_string())
    }
}
