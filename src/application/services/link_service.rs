//! Link creation, deletion, lookup and listing service.

use std::num::NonZeroUsize;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{LinkRecord, NewLink, Page};
use crate::domain::repositories::LinkRepository;
use crate::error::{LinkError, ValidationError};
use crate::utils::slug_validator;
use crate::utils::url_validator::validate_original_url;

/// Default and maximum number of links per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: u32,
    pub max_size: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 100,
        }
    }
}

impl PageLimits {
    /// Resolves a requested page size against the limits.
    ///
    /// `None` means the default size.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PageSize`] for 0 or anything above `max_size`.
    pub fn resolve(&self, requested: Option<u32>) -> Result<NonZeroUsize, ValidationError> {
        let size = requested.unwrap_or(self.default_size);

        NonZeroUsize::new(size as usize)
            .filter(|_| size <= self.max_size)
            .ok_or(ValidationError::PageSize {
                requested: size,
                max: self.max_size,
            })
    }
}

/// Service for managing short links.
///
/// Runs the submission-time checks (original URL, slug grammar) before
/// anything reaches the registry, and maps missing records to
/// [`LinkError::NotFound`].
pub struct LinkService<R: LinkRepository> {
    link_repository: Arc<R>,
    page_limits: PageLimits,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service with default page limits.
    pub fn new(link_repository: Arc<R>) -> Self {
        Self {
            link_repository,
            page_limits: PageLimits::default(),
        }
    }

    pub fn with_page_limits(mut self, page_limits: PageLimits) -> Self {
        self.page_limits = page_limits;
        self
    }

    pub fn page_limits(&self) -> PageLimits {
        self.page_limits
    }

    /// Creates a short link.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Validation`] if:
    /// - `original_url` is not an absolute http(s) URL
    /// - `short_slug` is empty or breaks the slug grammar
    ///
    /// Returns [`LinkError::DuplicateSlug`] if the slug is taken.
    pub async fn create_link(
        &self,
        original_url: &str,
        short_slug: &str,
    ) -> Result<LinkRecord, LinkError> {
        let original_url = validate_original_url(original_url)?;
        let short_slug = slug_validator::validate(short_slug)?;

        let result = self
            .link_repository
            .create(NewLink {
                original_url,
                short_slug,
            })
            .await;

        match &result {
            Ok(link) => tracing::info!(id = %link.id, slug = %link.short_slug, "Link created"),
            Err(e) => tracing::debug!(error = %e, "Link creation rejected"),
        }

        result
    }

    /// Deletes a short link and returns the id it had.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no link uses the slug.
    pub async fn delete_link(&self, short_slug: &str) -> Result<Uuid, LinkError> {
        let result = self.link_repository.delete(short_slug).await;

        match &result {
            Ok(id) => tracing::info!(%id, slug = short_slug, "Link deleted"),
            Err(e) => tracing::debug!(error = %e, "Link deletion rejected"),
        }

        result
    }

    /// Retrieves a link by its short slug.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no link uses the slug.
    pub async fn lookup_by_slug(&self, short_slug: &str) -> Result<LinkRecord, LinkError> {
        self.link_repository
            .find_by_slug(short_slug)
            .await?
            .ok_or_else(|| LinkError::NotFound {
                slug: short_slug.to_string(),
            })
    }

    /// Lists one page of links.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Validation`] for an out-of-range page size or an
    /// unknown cursor.
    pub async fn list(
        &self,
        cursor: Option<Uuid>,
        page_size: Option<u32>,
    ) -> Result<Page, LinkError> {
        let page_size = self.page_limits.resolve(page_size)?;
        self.link_repository.list(cursor, page_size).await
    }

    /// Returns every link in creation order, walking all pages.
    pub async fn export_all(&self) -> Result<Vec<LinkRecord>, LinkError> {
        let page_size = self.page_limits.resolve(Some(self.page_limits.max_size))?;
        let mut records = Vec::new();
        let mut cursor = None;

        loop {
            let page = self.link_repository.list(cursor, page_size).await?;
            records.extend(page.items);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Ok(records)
    }

    /// Counts all links.
    pub async fn count(&self) -> Result<usize, LinkError> {
        self.link_repository.count().await
    }
}
