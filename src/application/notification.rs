//! User-facing messages handed to the notification collaborator.

use crate::error::LinkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A toast-style title/message pair. Rendering is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    fn error(title: &str, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.to_string(),
            message: message.into(),
        }
    }

    /// Notification for a failed create or delete.
    ///
    /// Validation errors return `None`: they are shown inline on the form
    /// field (see [`LinkError::field_error`]) and never as a toast.
    pub fn for_error(err: &LinkError) -> Option<Self> {
        match err {
            LinkError::Validation(_) => None,
            LinkError::DuplicateSlug { slug } => Some(Self::error(
                "Link already exists",
                format!("The short link {slug} already exists. Choose another one."),
            )),
            LinkError::NotFound { slug } => Some(Self::error(
                "Link not found",
                format!("The short link {slug} no longer exists."),
            )),
            LinkError::Unknown { message } => {
                tracing::warn!(%message, "Surfacing unknown error to the user");
                Some(Self::error("Oops!", "Unknown error while saving the link."))
            }
        }
    }

    /// Confirmation shown after a short link was copied to the clipboard.
    pub fn link_copied(short_slug: &str) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: "Link copied".to_string(),
            message: format!("The link {short_slug} was copied to the clipboard."),
        }
    }
}
