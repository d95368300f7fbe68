//! Error taxonomy shared by the registry, the validators and the HTTP layer.
//!
//! Every failure is a variant of [`LinkError`]. Call sites branch on
//! [`LinkError::kind`] instead of downcasting, so adding a kind is a compile
//! error everywhere it is not handled.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

/// User-input defects. Recoverable locally and shown next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Short link cannot be empty")]
    Empty,

    #[error("Short link '{slug}' must use lowercase letters and digits separated by single hyphens")]
    Format { slug: String },

    #[error("Invalid URL: {reason}")]
    InvalidUrl { reason: String },

    #[error("Unknown pagination cursor '{cursor}'")]
    Cursor { cursor: Uuid },

    #[error("Page size must be between 1 and {max}, got {requested}")]
    PageSize { requested: u32, max: u32 },
}

/// Discriminant of [`LinkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    DuplicateSlug,
    NotFound,
    Unknown,
}

/// Errors returned by every registry and service operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Short link '{slug}' already exists")]
    DuplicateSlug { slug: String },

    #[error("Short link '{slug}' not found")]
    NotFound { slug: String },

    #[error("{message}")]
    Unknown { message: String },
}

impl LinkError {
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::DuplicateSlug { .. } => ErrorKind::DuplicateSlug,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// Wire code carried in the `error_code` field of API error bodies.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::Empty) => "EMPTY_SHORT_URL",
            Self::Validation(ValidationError::Format { .. }) => "INVALID_SHORT_URL",
            Self::Validation(ValidationError::InvalidUrl { .. }) => "INVALID_URL",
            Self::Validation(ValidationError::Cursor { .. }) => "INVALID_CURSOR",
            Self::Validation(ValidationError::PageSize { .. }) => "INVALID_PAGE_SIZE",
            Self::DuplicateSlug { .. } => "DUPLICATE_URL",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unknown { .. } => "UNKNOWN_ERROR",
        }
    }

    /// Structured context carried next to the message in API error bodies.
    pub fn details(&self) -> Value {
        match self {
            Self::Validation(ValidationError::Empty) => json!({}),
            Self::Validation(ValidationError::Format { slug })
            | Self::DuplicateSlug { slug }
            | Self::NotFound { slug } => json!({ "short_url": slug }),
            Self::Validation(ValidationError::InvalidUrl { reason }) => json!({ "reason": reason }),
            Self::Validation(ValidationError::Cursor { cursor }) => json!({ "cursor": cursor }),
            Self::Validation(ValidationError::PageSize { requested, max }) => {
                json!({ "requested": requested, "max": max })
            }
            Self::Unknown { .. } => json!({}),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::DuplicateSlug => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Inline form error for validation failures; `None` for every other kind.
    pub fn field_error(&self) -> Option<FieldError> {
        let Self::Validation(err) = self else {
            return None;
        };

        let field = match err {
            ValidationError::InvalidUrl { .. } => Field::OriginalUrl,
            ValidationError::Empty | ValidationError::Format { .. } => Field::ShortUrl,
            ValidationError::Cursor { .. } | ValidationError::PageSize { .. } => return None,
        };

        Some(FieldError {
            field,
            message: err.to_string(),
        })
    }
}

/// Form fields of the link submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    OriginalUrl,
    ShortUrl,
}

/// A validation message bound to the form field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl From<validator::ValidationErrors> for LinkError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let reason = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: {}", e.code),
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self::Validation(ValidationError::InvalidUrl { reason })
    }
}

/// JSON body returned for every failed API request.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error_code: &'static str,
    message: String,
    details: Value,
}

impl IntoResponse for LinkError {
    fn into_response(self) -> Response {
        if self.kind() == ErrorKind::Unknown {
            tracing::error!(error = %self, "Request failed with an unexpected error");
        }

        let body = ErrorBody {
            error_code: self.error_code(),
            message: self.to_string(),
            details: self.details(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
