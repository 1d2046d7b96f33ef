//! pr-reporter: daily open pull request reports, delivered by email
//!
//! Three sequential stages: collect open pull requests from every configured
//! GitHub repository, write them to a spreadsheet report, and email the
//! report to a recipient list.

pub mod config;
pub mod error;
pub mod notify;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
