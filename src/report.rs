//! Report writing
//!
//! Flattens collected records into a fixed-schema worksheet and persists it
//! as an `.xlsx` file. Any failure here is fatal to the run: a report must
//! never be emailed partially written.

use crate::error::{Error, Result};
use crate::types::PullRequestRecord;
use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::{debug, info};

/// Fixed column set, in output order
pub const COLUMNS: [&str; 8] = [
    "Repository",
    "PR Number",
    "Title",
    "Author",
    "URL",
    "Created At",
    "Updated At",
    "State",
];

/// Worksheet name inside the report file
const SHEET_NAME: &str = "Open PRs";

/// One row of the report, in the fixed column order
///
/// One-to-one with [`PullRequestRecord`]; construction fails when the source
/// record carries no author, since the author column is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Repository the record was fetched from
    pub repository: String,
    /// PR number, rendered as a number cell
    pub number: u64,
    /// PR title
    pub title: String,
    /// Author handle
    pub author: String,
    /// Web URL
    pub url: String,
    /// Created timestamp, rendered as text
    pub created_at: String,
    /// Updated timestamp, rendered as text
    pub updated_at: String,
    /// PR state
    pub state: String,
}

impl ReportRow {
    /// Project a record into a row.
    pub fn from_record(record: &PullRequestRecord) -> Result<Self> {
        let author = record.author.clone().ok_or_else(|| {
            Error::ReportBuild(format!(
                "pull request {}#{} has no author",
                record.repo, record.number
            ))
        })?;

        Ok(Self {
            repository: record.repo.to_string(),
            number: record.number,
            title: record.title.clone(),
            author,
            url: record.html_url.clone(),
            created_at: format_timestamp(&record.created_at),
            updated_at: format_timestamp(&record.updated_at),
            state: record.state.clone(),
        })
    }
}

/// Render a timestamp the way the upstream API does (`2024-05-01T12:00:00Z`).
///
/// Timestamps go into the sheet as text cells so they round-trip unchanged.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Write all records to an `.xlsx` report at `path`.
///
/// Writes a header row, then one row per record in collector order. Parent
/// directories are created as needed. The caller is responsible for not
/// invoking this with an empty record set.
#[allow(clippy::cast_precision_loss)]
pub fn write_report(records: &[PullRequestRecord], path: &Path) -> Result<()> {
    let rows = records
        .iter()
        .map(ReportRow::from_record)
        .collect::<Result<Vec<_>>>()?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col_index(col), *name, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = u32::try_from(i + 1).map_err(|_| Error::ReportBuild("too many rows".into()))?;
        worksheet.write_string(r, 0, &row.repository)?;
        worksheet.write_number(r, 1, row.number as f64)?;
        worksheet.write_string(r, 2, &row.title)?;
        worksheet.write_string(r, 3, &row.author)?;
        worksheet.write_string(r, 4, &row.url)?;
        worksheet.write_string(r, 5, &row.created_at)?;
        worksheet.write_string(r, 6, &row.updated_at)?;
        worksheet.write_string(r, 7, &row.state)?;
    }

    workbook
        .save(path)
        .map_err(|e| Error::ReportBuild(format!("failed to write '{}': {e}", path.display())))?;

    debug!(rows = rows.len(), "wrote report rows");
    info!(path = %path.display(), "report written");
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
const fn col_index(col: usize) -> u16 {
    col as u16
}
