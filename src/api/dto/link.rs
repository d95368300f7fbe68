//! DTOs for link endpoints.
//!
//! Field names match the backend wire format (`original_url`, `short_url`,
//! `access_count`, `created_at`, `next_cursor`) so the in-memory backend and
//! a remote one are interchangeable for clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{LinkRecord, Page};

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The original URL (must be absolute).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// The desired short slug, validated against the slug grammar by the service.
    pub short_url: String,
}

/// JSON representation of a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResponse {
    pub id: Uuid,
    pub original_url: String,
    pub short_url: String,
    pub access_count: u64,
    pub created_at: DateTime<Utc>,
}

impl From<LinkRecord> for LinkResponse {
    fn from(link: LinkRecord) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_url: link.short_slug,
            access_count: link.access_count,
            created_at: link.created_at,
        }
    }
}

impl From<LinkResponse> for LinkRecord {
    fn from(link: LinkResponse) -> Self {
        LinkRecord::new(
            link.id,
            link.original_url,
            link.short_url,
            link.access_count,
            link.created_at,
        )
    }
}

/// One page of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinksPageResponse {
    pub items: Vec<LinkResponse>,
    pub next_cursor: Option<Uuid>,
    pub total: usize,
}

impl From<Page> for LinksPageResponse {
    fn from(page: Page) -> Self {
        Self {
            items: page.items.into_iter().map(LinkResponse::from).collect(),
            next_cursor: page.next_cursor,
            total: page.total,
        }
    }
}

impl From<LinksPageResponse> for Page {
    fn from(page: LinksPageResponse) -> Self {
        Self {
            items: page.items.into_iter().map(LinkRecord::from).collect(),
            next_cursor: page.next_cursor,
            total: page.total,
        }
    }
}

/// Response to a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteLinkResponse {
    pub id: Uuid,
}
