//! Registry outcomes delivered to the list reconciler.

use uuid::Uuid;

use crate::domain::entities::{LinkRecord, Page};

/// Identifies one page request.
///
/// Issued by [`crate::application::reconciler::LinkListCache::begin_fetch`].
/// A newer ticket for the same cursor supersedes older ones; pages carrying a
/// superseded ticket are dropped on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub cursor: Option<Uuid>,
    pub generation: u64,
}

/// A successful registry operation.
///
/// Failed operations never produce an event, so a failure can not leak into
/// the displayed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    Created(LinkRecord),
    Deleted { id: Uuid },
    PageLoaded { ticket: FetchTicket, page: Page },
}
