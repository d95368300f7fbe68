//! Repository trait for link registry access.

use crate::domain::entities::{LinkRecord, NewLink, Page};
use crate::error::LinkError;
use async_trait::async_trait;
use std::num::NonZeroUsize;
use uuid::Uuid;

/// The link registry contract.
///
/// Mirrors the backend API (`list`, `create`, `delete`) so an in-process
/// registry and a remote one are interchangeable behind this trait.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - Session-scoped in-memory registry
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new link.
    ///
    /// The duplicate check and the insertion form one atomic step.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::DuplicateSlug`] if a record already uses the slug.
    async fn create(&self, new_link: NewLink) -> Result<LinkRecord, LinkError>;

    /// Removes the link with the given slug and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no record uses the slug. The
    /// registry is left untouched in that case.
    async fn delete(&self, short_slug: &str) -> Result<Uuid, LinkError>;

    /// Finds a link by its short slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkRecord))` if found
    /// - `Ok(None)` if not found
    async fn find_by_slug(&self, short_slug: &str) -> Result<Option<LinkRecord>, LinkError>;

    /// Lists links in creation order.
    ///
    /// # Arguments
    ///
    /// - `cursor` - Id of the last record of the previous page, `None` for the first page
    /// - `page_size` - Maximum number of items
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Validation`] for a cursor the registry never issued.
    async fn list(
        &self,
        cursor: Option<Uuid>,
        page_size: NonZeroUsize,
    ) -> Result<Page, LinkError>;

    /// Counts all links.
    async fn count(&self) -> Result<usize, LinkError>;
}
