//! Cursor-paginated view over the registry.

use uuid::Uuid;

use super::LinkRecord;

/// One page of links in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub items: Vec<LinkRecord>,
    /// Id of the last item when more records follow, `None` at the end.
    pub next_cursor: Option<Uuid>,
    /// Number of records in the whole registry, not just this page.
    pub total: usize,
}

impl Page {
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}
