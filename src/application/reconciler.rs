//! Client-side list cache and the rules that keep it in step with the registry.
//!
//! The registry is authoritative; [`LinkListCache`] is the display copy. It
//! changes only through [`LinkListCache::apply`], one [`LinkEvent`] at a
//! time, which keeps the update rules testable without any UI.

use std::collections::{HashMap, HashSet};

use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::{LinkRecord, Page};
use crate::domain::link_event::{FetchTicket, LinkEvent};

/// Displayed link list, in registry (creation) order.
#[derive(Debug, Default)]
pub struct LinkListCache {
    links: Vec<LinkRecord>,
    total: usize,
    /// Cursor for the next page to request.
    frontier: Option<Uuid>,
    exhausted: bool,
    /// Ids removed during this session. Ids are never reused, so a page
    /// fetched before a delete can not bring the record back.
    deleted: HashSet<Uuid>,
    generation: u64,
    /// Latest ticket generation per cursor.
    pending: HashMap<Option<Uuid>, u64>,
}

impl LinkListCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Registry-wide record count: the last page's total, adjusted by the
    /// creates and deletes applied since.
    ///
    /// Exact only when events are applied in the order the registry handled
    /// them. A page listed before a create but applied after its `Created`
    /// event rolls the count back; [`crate::application::session::LinkSession`]
    /// rules this out by serializing registry calls with their events.
    pub fn total(&self) -> usize {
        self.total
    }

    /// `false` once a page arrived without a next cursor.
    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    /// Issues a ticket for the next page, or `None` when everything is loaded.
    ///
    /// Calling this again before the previous page arrived supersedes the
    /// earlier ticket for the same cursor.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.exhausted {
            return None;
        }

        self.generation += 1;
        let ticket = FetchTicket {
            cursor: self.frontier,
            generation: self.generation,
        };
        self.pending.insert(ticket.cursor, ticket.generation);

        Some(ticket)
    }

    /// Applies one registry outcome. Returns whether the visible list changed.
    pub fn apply(&mut self, event: LinkEvent) -> bool {
        match event {
            LinkEvent::Created(record) => {
                let inserted = self.insert(record);
                if inserted {
                    self.total += 1;
                }
                inserted
            }
            LinkEvent::Deleted { id } => {
                if self.deleted.insert(id) {
                    self.total = self.total.saturating_sub(1);
                }

                let before = self.links.len();
                self.links.retain(|link| link.id != id);
                self.links.len() != before
            }
            LinkEvent::PageLoaded { ticket, page } => self.merge_page(ticket, page),
        }
    }

    fn merge_page(&mut self, ticket: FetchTicket, page: Page) -> bool {
        if self.pending.get(&ticket.cursor) != Some(&ticket.generation) {
            debug!(
                cursor = ?ticket.cursor,
                generation = ticket.generation,
                "Discarding superseded page"
            );
            return false;
        }
        self.pending.remove(&ticket.cursor);

        let mut changed = false;
        for record in page.items {
            changed |= self.insert(record);
        }
        self.total = page.total;

        if ticket.cursor == self.frontier {
            self.frontier = page.next_cursor;
            self.exhausted = page.next_cursor.is_none();
        }

        changed
    }

    /// Inserts at the record's creation-order position unless already present.
    fn insert(&mut self, record: LinkRecord) -> bool {
        if self.deleted.contains(&record.id) || self.links.iter().any(|l| l.id == record.id) {
            return false;
        }

        let index = self
            .links
            .partition_point(|link| link.created_at <= record.created_at);
        self.links.insert(index, record);
        true
    }
}
