//! Link record entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::utils::slug_validator::ValidSlug;

/// A shortened link as held by the registry.
///
/// Every field is fixed at creation. `access_count` is only ever raised by
/// the redirect service, never by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub id: Uuid,
    pub original_url: String,
    pub short_slug: String,
    pub access_count: u64,
    pub created_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Creates a new LinkRecord instance.
    pub fn new(
        id: Uuid,
        original_url: String,
        short_slug: String,
        access_count: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_slug,
            access_count,
            created_at,
        }
    }

    /// Full shareable link for a front-end host, e.g. `brev.ly/promo`.
    pub fn share_url(&self, host: &str) -> String {
        format!("{}/{}", host.trim_end_matches('/'), self.short_slug)
    }
}

/// Input data for creating a new link.
///
/// Both fields have already passed submission checks; the slug type makes
/// that impossible to skip.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub original_url: String,
    pub short_slug: ValidSlug,
}
