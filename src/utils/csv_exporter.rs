//! CSV export of link lists.
//!
//! Output format:
//!
//! ```text
//! ID,Original URL,Short URL,Access Count,Created at
//! 0190f5e2-...,https://example.com,promo,3,2024-01-01 00:00:00.000
//! ```
//!
//! Fields are written verbatim. Embedded commas are not quoted, so a URL
//! containing a comma produces an extra column; downstream consumers of the
//! export accept this.

use chrono::{Local, TimeZone};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fmt;
use std::string::FromUtf8Error;

use crate::domain::entities::LinkRecord;
use crate::error::LinkError;

/// Fixed header row.
pub const CSV_HEADER: [&str; 5] = ["ID", "Original URL", "Short URL", "Access Count", "Created at"];

/// `YYYY-MM-DD HH:mm:ss.SSS`
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Filename used when the caller does not choose one.
pub const DEFAULT_EXPORT_FILENAME: &str = "links.csv";

/// Errors that can occur while rendering CSV.
#[derive(Debug, thiserror::Error)]
pub enum CsvExportError {
    #[error("Failed to write CSV row: {0}")]
    Write(#[from] csv::Error),

    #[error("Failed to flush CSV: {0}")]
    Flush(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

impl From<CsvExportError> for LinkError {
    fn from(err: CsvExportError) -> Self {
        LinkError::unknown(err.to_string())
    }
}

/// A rendered export handed to the file-download collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDownload {
    pub filename: String,
    pub body: String,
}

/// Renders records as CSV with timestamps in the local time zone.
///
/// Returns an empty string for an empty slice. Callers are expected to skip
/// the export altogether in that case rather than offer an empty file.
pub fn to_csv(records: &[LinkRecord]) -> Result<String, CsvExportError> {
    to_csv_in(records, &Local)
}

/// Renders records as CSV with timestamps converted to `tz`.
///
/// Rows follow the order of `records`, joined by `\n` with no trailing
/// newline.
pub fn to_csv_in<Tz>(records: &[LinkRecord], tz: &Tz) -> Result<String, CsvExportError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if records.is_empty() {
        return Ok(String::new());
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for record in records {
        writer.write_record([
            record.id.to_string(),
            record.original_url.clone(),
            record.short_slug.clone(),
            record.access_count.to_string(),
            record
                .created_at
                .with_timezone(tz)
                .format(CREATED_AT_FORMAT)
                .to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let mut text = String::from_utf8(bytes)?;

    if text.ends_with('\n') {
        text.pop();
    }

    Ok(text)
}
