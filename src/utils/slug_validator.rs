//! Short slug validation.
//!
//! A slug is one or more lowercase alphanumeric segments joined by single
//! hyphens. Candidates are rejected, never corrected: `My-Link` fails instead
//! of becoming `my-link`.

use crate::error::ValidationError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Compiled slug grammar.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// A slug that passed [`validate`].
///
/// The only way to obtain one is through validation, so functions taking a
/// `ValidSlug` never have to re-check the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidSlug(String);

impl ValidSlug {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ValidSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ValidSlug {
    type Error = ValidationError;

    fn try_from(candidate: &str) -> Result<Self, Self::Error> {
        validate(candidate)
    }
}

/// Validates a candidate short slug.
///
/// # Errors
///
/// - [`ValidationError::Empty`] if the candidate is empty after trimming
/// - [`ValidationError::Format`] if it does not match `^[a-z0-9]+(-[a-z0-9]+)*$`
///
/// # Examples
///
/// ```
/// use brevly::utils::slug_validator::validate;
///
/// assert_eq!(validate("my-link-2024").unwrap().as_str(), "my-link-2024");
/// assert!(validate("My-Link").is_err());
/// ```
pub fn validate(candidate: &str) -> Result<ValidSlug, ValidationError> {
    if candidate.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    if !SLUG_REGEX.is_match(candidate) {
        return Err(ValidationError::Format {
            slug: candidate.to_string(),
        });
    }

    Ok(ValidSlug(candidate.to_string()))
}
