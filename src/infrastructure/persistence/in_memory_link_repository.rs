//! In-memory link registry.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::{BTreeMap, HashMap};
use std::num::NonZeroUsize;
use std::ops::Bound;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::{LinkRecord, NewLink, Page};
use crate::domain::repositories::LinkRepository;
use crate::error::{LinkError, ValidationError};

/// Session-scoped registry holding every link in memory.
///
/// Records are kept in creation order. Mutations take the write lock for the
/// whole check-then-mutate sequence and never await while holding it, so two
/// creates with the same slug can not interleave.
///
/// Deleted slugs are free for reuse. Ids are never reused, and the cursor
/// position of a deleted record stays valid so an in-flight pagination can
/// continue past it.
pub struct InMemoryLinkRepository {
    state: RwLock<RegistryState>,
}

#[derive(Default)]
struct RegistryState {
    records: BTreeMap<u64, LinkRecord>,
    slugs: HashMap<String, u64>,
    /// Position of every id ever issued, including deleted ones.
    positions: HashMap<Uuid, u64>,
    next_position: u64,
    last_created_at: Option<DateTime<Utc>>,
}

impl RegistryState {
    /// Current time, bumped past the previous record so creation timestamps
    /// are strictly increasing.
    fn next_created_at(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let created_at = match self.last_created_at {
            Some(last) if now <= last => last + TimeDelta::milliseconds(1),
            _ => now,
        };

        self.last_created_at = Some(created_at);
        created_at
    }
}

impl InMemoryLinkRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        debug!("Using in-memory link registry");
        Self {
            state: RwLock::new(RegistryState::default()),
        }
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<LinkRecord, LinkError> {
        let mut state = self.state.write().await;

        if state.slugs.contains_key(new_link.short_slug.as_str()) {
            return Err(LinkError::DuplicateSlug {
                slug: new_link.short_slug.into_inner(),
            });
        }

        let position = state.next_position;
        state.next_position += 1;

        let created_at = state.next_created_at();
        let record = LinkRecord::new(
            Uuid::now_v7(),
            new_link.original_url,
            new_link.short_slug.into_inner(),
            0,
            created_at,
        );

        state.slugs.insert(record.short_slug.clone(), position);
        state.positions.insert(record.id, position);
        state.records.insert(position, record.clone());

        Ok(record)
    }

    async fn delete(&self, short_slug: &str) -> Result<Uuid, LinkError> {
        let mut state = self.state.write().await;

        let Some(position) = state.slugs.remove(short_slug) else {
            return Err(LinkError::NotFound {
                slug: short_slug.to_string(),
            });
        };

        state
            .records
            .remove(&position)
            .map(|record| record.id)
            .ok_or_else(|| {
                LinkError::unknown(format!("Slug index points at missing record {position}"))
            })
    }

    async fn find_by_slug(&self, short_slug: &str) -> Result<Option<LinkRecord>, LinkError> {
        let state = self.state.read().await;

        Ok(state
            .slugs
            .get(short_slug)
            .and_then(|position| state.records.get(position))
            .cloned())
    }

    async fn list(
        &self,
        cursor: Option<Uuid>,
        page_size: NonZeroUsize,
    ) -> Result<Page, LinkError> {
        let state = self.state.read().await;

        let start = match cursor {
            None => Bound::Unbounded,
            Some(id) => {
                let position = state
                    .positions
                    .get(&id)
                    .ok_or(ValidationError::Cursor { cursor: id })?;
                Bound::Excluded(*position)
            }
        };

        let mut window = state.records.range((start, Bound::Unbounded));
        let items: Vec<LinkRecord> = window
            .by_ref()
            .take(page_size.get())
            .map(|(_, record)| record.clone())
            .collect();

        let next_cursor = match window.next() {
            Some(_) => items.last().map(|record| record.id),
            None => None,
        };

        Ok(Page {
            items,
            next_cursor,
            total: state.records.len(),
        })
    }

    async fn count(&self) -> Result<usize, LinkError> {
        Ok(self.state.read().await.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::slug_validator::validate;

    fn new_link(url: &str, slug: &str) -> NewLink {
        NewLink {
            original_url: url.to_string(),
            short_slug: validate(slug).unwrap(),
        }
    }

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[tokio::test]
    async fn test_create_sets_defaults() {
        let repo = InMemoryLinkRepository::new();
        let record = repo
            .create(new_link("https://example.com", "promo"))
            .await
            .unwrap();

        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.short_slug, "promo");
        assert_eq!(record.access_count, 0);
        assert_eq!(record.id.get_version_num(), 7);
    }

    #[tokio::test]
    async fn test_created_at_strictly_increasing() {
        let repo = InMemoryLinkRepository::new();
        let mut previous = None;

        for i in 0..50 {
            let record = repo
                .create(new_link("https://example.com", &format!("s{i}")))
                .await
                .unwrap();
            if let Some(prev) = previous {
                assert!(record.created_at > prev);
            }
            previous = Some(record.created_at);
        }
    }

    #[tokio::test]
    async fn test_cursor_of_deleted_record_still_valid() {
        let repo = InMemoryLinkRepository::new();
        for slug in ["a", "b", "c", "d"] {
            repo.create(new_link("https://example.com", slug))
                .await
                .unwrap();
        }

        let first = repo.list(None, size(2)).await.unwrap();
        let cursor = first.next_cursor.unwrap();
        repo.delete("b").await.unwrap();

        let second = repo.list(Some(cursor), size(2)).await.unwrap();
        let slugs: Vec<_> = second.items.iter().map(|r| r.short_slug.as_str()).collect();
        assert_eq!(slugs, ["c", "d"]);
        assert!(second.next_cursor.is_none());
        assert_eq!(second.total, 3);
    }

    #[tokio::test]
    async fn test_unknown_cursor_rejected() {
        let repo = InMemoryLinkRepository::new();
        let cursor = Uuid::now_v7();

        let err = repo.list(Some(cursor), size(10)).await.unwrap_err();
        assert_eq!(err, LinkError::from(ValidationError::Cursor { cursor }));
    }

    #[tokio::test]
    async fn test_empty_registry_lists_empty_page() {
        let repo = InMemoryLinkRepository::new();
        let page = repo.list(None, size(10)).await.unwrap();

        assert!(page.items.is_empty());
        assert!(page.is_last());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_exact_fit_has_no_trailing_page() {
        let repo = InMemoryLinkRepository::new();
        for slug in ["a", "b"] {
            repo.create(new_link("https://example.com", slug))
                .await
                .unwrap();
        }

        let page = repo.list(None, size(2)).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_count_tracks_deletes() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("https://a.com", "a")).await.unwrap();
        repo.create(new_link("https://b.com", "b")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        repo.delete("a").await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
