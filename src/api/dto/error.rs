//! Wire form of API error bodies, for clients of the link API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{LinkError, ValidationError};

/// `{ error_code, message, details }` as sent by the link API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error_code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Value,
}

impl ApiErrorBody {
    /// Decodes a raw response body. Anything that is not a well-formed error
    /// body becomes [`LinkError::Unknown`].
    pub fn decode(body: &str) -> LinkError {
        match serde_json::from_str::<Self>(body) {
            Ok(parsed) => parsed.into_link_error(),
            Err(e) => {
                tracing::debug!(error = %e, "Malformed error body");
                LinkError::unknown(body.to_string())
            }
        }
    }

    pub fn into_link_error(self) -> LinkError {
        let slug = self.detail_str("short_url");

        match (self.error_code.as_str(), slug) {
            ("EMPTY_SHORT_URL", _) => ValidationError::Empty.into(),
            ("INVALID_SHORT_URL", Some(slug)) => ValidationError::Format { slug }.into(),
            ("INVALID_URL", _) => ValidationError::InvalidUrl {
                reason: self.detail_str("reason").unwrap_or(self.message),
            }
            .into(),
            ("INVALID_CURSOR", _) => match self.detail_str("cursor").map(|c| c.parse::<Uuid>()) {
                Some(Ok(cursor)) => ValidationError::Cursor { cursor }.into(),
                _ => LinkError::unknown(self.message),
            },
            ("INVALID_PAGE_SIZE", _) => {
                match (self.detail_u32("requested"), self.detail_u32("max")) {
                    (Some(requested), Some(max)) => {
                        ValidationError::PageSize { requested, max }.into()
                    }
                    _ => LinkError::unknown(self.message),
                }
            }
            ("DUPLICATE_URL", Some(slug)) => LinkError::DuplicateSlug { slug },
            ("NOT_FOUND", Some(slug)) => LinkError::NotFound { slug },
            _ => LinkError::unknown(self.message),
        }
    }

    fn detail_str(&self, key: &str) -> Option<String> {
        self.details.get(key)?.as_str().map(str::to_string)
    }

    fn detail_u32(&self, key: &str) -> Option<u32> {
        u32::try_from(self.details.get(key)?.as_u64()?).ok()
    }
}

impl From<&LinkError> for ApiErrorBody {
    fn from(err: &LinkError) -> Self {
        Self {
            error_code: err.error_code().to_string(),
            message: err.to_string(),
            details: err.details(),
        }
    }
}
