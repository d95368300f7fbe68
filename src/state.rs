use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Shared state injected into every handler.
///
/// The registry lives behind `link_service`; cloning the state shares it.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    /// Filename offered in the `Content-Disposition` header of CSV exports.
    pub export_filename: Arc<str>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<InMemoryLinkRepository>>, export_filename: &str) -> Self {
        Self {
            link_service,
            export_filename: Arc::from(export_filename),
        }
    }
}
