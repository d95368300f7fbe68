//! Download filename resolution for CSV exports.

use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

static FILENAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"filename="?([^"]+)"?"#).unwrap());

/// Builds an `attachment` header value for `filename`.
pub fn attachment(filename: &str) -> String {
    format!("attachment; filename=\"{filename}\"")
}

/// Extracts the filename from a `Content-Disposition` header value.
///
/// Falls back to `<random uuid>_links.csv` when the header is missing or
/// carries no filename.
pub fn filename_from_content_disposition(header: Option<&str>) -> String {
    header
        .and_then(|value| FILENAME_REGEX.captures(value))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("{}_links.csv", Uuid::new_v4()))
}
