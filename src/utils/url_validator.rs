//! Original URL checks.
//!
//! Unlike short slugs, original URLs are stored exactly as submitted; the
//! check only guarantees they parse as absolute HTTP or HTTPS URLs.

use crate::error::ValidationError;
use url::Url;

/// Validates the original URL of a new link and returns it unchanged.
///
/// # Rules
///
/// 1. Must parse as an absolute URL (scheme and host present)
/// 2. Scheme must be `http` or `https`
///
/// Rejects `javascript:`, `data:`, `file:` and relative URLs, and any input
/// containing whitespace or control characters. The URL parser strips those
/// silently, so they would otherwise be stored along with the URL.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidUrl`] with the reason.
pub fn validate_original_url(input: &str) -> Result<String, ValidationError> {
    if input
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(ValidationError::InvalidUrl {
            reason: "URL must not contain whitespace or control characters".to_string(),
        });
    }

    let url = Url::parse(input).map_err(|e| ValidationError::InvalidUrl {
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ValidationError::InvalidUrl {
                reason: format!("unsupported scheme '{scheme}', only http and https are allowed"),
            });
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::InvalidUrl {
            reason: "missing host".to_string(),
        });
    }

    Ok(input.to_string())
}
