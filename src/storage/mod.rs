use crate::{
    domain::{
        sort_tickets, NewTicket, Priority, SortConfig, Ticket, TicketId, TicketStatus,
        TicketUpdate, UserId,
    },
    error::Result,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory;

#[cfg(feature = "file-storage")]
pub use file_storage::FileTicketStore;
pub use memory::InMemoryTicketStore;

/// Options for listing tickets from a store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub priority: Option<Priority>,
    pub assignee: Option<UserId>,
    /// Case-insensitive match against title or description
    pub search: Option<String>,
    /// 1-based page number, only meaningful together with `limit`
    pub page: Option<usize>,
    pub limit: Option<usize>,
    /// Order applied before paging; store order when absent
    pub sort: Option<SortConfig>,
}

impl TicketFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sorted(mut self, sort: SortConfig) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn paged(mut self, page: usize, limit: usize) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Checks the attribute criteria (not pagination) against a ticket
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.status.map_or(true, |s| ticket.status == s)
            && self.priority.map_or(true, |p| ticket.priority == p)
            && self
                .assignee
                .as_ref()
                .map_or(true, |a| ticket.assignee.as_ref() == Some(a))
            && self
                .search
                .as_deref()
                .map_or(true, |q| ticket.matches_search(q))
    }

    /// Applies the filter, then the sort, then the requested page
    pub fn apply(&self, tickets: impl IntoIterator<Item = Ticket>) -> Vec<Ticket> {
        let mut matching: Vec<Ticket> = tickets.into_iter().filter(|t| self.matches(t)).collect();
        if let Some(sort) = self.sort {
            sort_tickets(&mut matching, sort);
        }
        match self.limit {
            Some(limit) => {
                let offset = self
                    .page
                    .unwrap_or(1)
                    .saturating_sub(1)
                    .saturating_mul(limit);
                matching.into_iter().skip(offset).take(limit).collect()
            }
            None => matching,
        }
    }
}

/// Ticket counts as reported by a store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketStats {
    pub total: usize,
    pub by_status: BTreeMap<TicketStatus, usize>,
    pub by_priority: BTreeMap<Priority, usize>,
    pub unassigned: usize,
    pub ai_responded: usize,
}

impl TicketStats {
    pub fn from_tickets<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        let mut stats = Self::default();
        for ticket in tickets {
            stats.total += 1;
            *stats.by_status.entry(ticket.status).or_default() += 1;
            *stats.by_priority.entry(ticket.priority).or_default() += 1;
            if ticket.assignee.is_none() {
                stats.unassigned += 1;
            }
            if ticket.ai_responded {
                stats.ai_responded += 1;
            }
        }
        stats
    }

    pub fn status_count(&self, status: TicketStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn priority_count(&self, priority: Priority) -> usize {
        self.by_priority.get(&priority).copied().unwrap_or(0)
    }
}

/// Collaborator that owns ticket durability.
///
/// The board core never performs I/O itself; it calls a store after a change
/// has been applied locally.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Lists tickets matching the filter, in the store's stable order
    async fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>>;

    /// Loads a ticket by ID
    async fn get(&self, id: &TicketId) -> Result<Ticket>;

    /// Creates a `todo` ticket with a fresh ID
    async fn create(&self, fields: NewTicket) -> Result<Ticket>;

    /// Applies a partial update
    async fn update(&self, id: &TicketId, fields: TicketUpdate) -> Result<Ticket>;

    /// Persists a new status, typically after a cross-column move
    async fn update_status(&self, id: &TicketId, status: TicketStatus) -> Result<Ticket> {
        self.update(
            id,
            TicketUpdate {
                status: Some(status),
                ..TicketUpdate::default()
            },
        )
        .await
    }

    /// Sets or clears the assignee
    async fn assign(&self, id: &TicketId, assignee: Option<UserId>) -> Result<Ticket> {
        self.update(
            id,
            TicketUpdate {
                assignee: Some(assignee),
                ..TicketUpdate::default()
            },
        )
        .await
    }

    /// Records one more comment on the ticket
    async fn add_comment(&self, id: &TicketId) -> Result<Ticket>;

    /// Deletes a ticket
    async fn delete(&self, id: &TicketId) -> Result<()>;

    /// Counts tickets by status and priority
    async fn stats(&self) -> Result<TicketStats> {
        let tickets = self.list(&TicketFilter::all()).await?;
        Ok(TicketStats::from_tickets(&tickets))
    }
}
