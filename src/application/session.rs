//! Per-session composition of the link service and the displayed list.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::reconciler::LinkListCache;
use crate::application::services::LinkService;
use crate::domain::entities::LinkRecord;
use crate::domain::link_event::LinkEvent;
use crate::domain::repositories::LinkRepository;
use crate::error::LinkError;
use crate::utils::csv_exporter::{CsvDownload, CsvExportError, DEFAULT_EXPORT_FILENAME, to_csv};

/// One interactive session: the registry service plus the list it displays.
///
/// Constructed once when the session starts and dropped on teardown. Every
/// successful operation is turned into a [`LinkEvent`] and applied to the
/// cache; failed operations leave the cache untouched and return the error
/// for the caller to show.
///
/// Registry calls run under the cache write guard, so events reach the
/// cache in the order the registry performed them and the cached total
/// stays exact.
pub struct LinkSession<R: LinkRepository> {
    service: Arc<LinkService<R>>,
    cache: RwLock<LinkListCache>,
    export_filename: String,
}

impl<R: LinkRepository> LinkSession<R> {
    pub fn new(service: Arc<LinkService<R>>) -> Self {
        Self {
            service,
            cache: RwLock::new(LinkListCache::new()),
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }

    pub fn with_export_filename(mut self, filename: impl Into<String>) -> Self {
        self.export_filename = filename.into();
        self
    }

    /// Creates a link and appends it to the displayed list.
    pub async fn create_link(
        &self,
        original_url: &str,
        short_slug: &str,
    ) -> Result<LinkRecord, LinkError> {
        let mut cache = self.cache.write().await;
        let record = self.service.create_link(original_url, short_slug).await?;
        cache.apply(LinkEvent::Created(record.clone()));
        Ok(record)
    }

    /// Deletes a link and removes it from the displayed list by id.
    pub async fn delete_link(&self, short_slug: &str) -> Result<Uuid, LinkError> {
        let mut cache = self.cache.write().await;
        let id = self.service.delete_link(short_slug).await?;
        cache.apply(LinkEvent::Deleted { id });
        Ok(id)
    }

    /// Loads the next page into the displayed list.
    ///
    /// Returns `Ok(false)` without calling the registry once the last page
    /// has been loaded.
    pub async fn load_next_page(&self, page_size: Option<u32>) -> Result<bool, LinkError> {
        let mut cache = self.cache.write().await;
        let Some(ticket) = cache.begin_fetch() else {
            return Ok(false);
        };

        let page = self.service.list(ticket.cursor, page_size).await?;
        cache.apply(LinkEvent::PageLoaded { ticket, page });

        Ok(true)
    }

    /// Applies an event to the displayed list.
    pub async fn dispatch(&self, event: LinkEvent) -> bool {
        self.cache.write().await.apply(event)
    }

    /// Snapshot of the displayed list.
    pub async fn links(&self) -> Vec<LinkRecord> {
        self.cache.read().await.links().to_vec()
    }

    pub async fn total(&self) -> usize {
        self.cache.read().await.total()
    }

    pub async fn has_more(&self) -> bool {
        self.cache.read().await.has_more()
    }

    /// Renders the displayed list for download.
    ///
    /// Returns `Ok(None)` when the list is empty; the download action should
    /// be unavailable then.
    pub async fn download_csv(&self) -> Result<Option<CsvDownload>, CsvExportError> {
        let cache = self.cache.read().await;

        if cache.is_empty() {
            return Ok(None);
        }

        Ok(Some(CsvDownload {
            filename: self.export_filename.clone(),
            body: to_csv(cache.links())?,
        }))
    }
}
