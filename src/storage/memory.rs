use crate::{
    domain::{NewTicket, Ticket, TicketCollection, TicketId, TicketUpdate},
    error::{BoardError, Result},
    storage::{TicketFilter, TicketStore},
};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

/// Ephemeral ticket store kept in memory, listing in insertion order
#[derive(Debug, Default)]
pub struct InMemoryTicketStore {
    tickets: RwLock<TicketCollection>,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing tickets
    pub fn with_tickets(tickets: impl IntoIterator<Item = Ticket>) -> Self {
        Self {
            tickets: RwLock::new(tickets.into_iter().collect()),
        }
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>> {
        let tickets = self.tickets.read().await;
        Ok(filter.apply(tickets.iter().cloned()))
    }

    async fn get(&self, id: &TicketId) -> Result<Ticket> {
        let tickets = self.tickets.read().await;
        tickets
            .get(id)
            .cloned()
            .ok_or_else(|| BoardError::UnknownTicket(id.to_string()))
    }

    async fn create(&self, fields: NewTicket) -> Result<Ticket> {
        let ticket = Ticket::from_new(TicketId::generate(), fields, Utc::now());
        self.tickets.write().await.insert(ticket.clone());
        Ok(ticket)
    }

    async fn update(&self, id: &TicketId, fields: TicketUpdate) -> Result<Ticket> {
        let mut tickets = self.tickets.write().await;
        let ticket = tickets
            .get_mut(id)
            .ok_or_else(|| BoardError::UnknownTicket(id.to_string()))?;
        fields.apply(ticket);
        Ok(ticket.clone())
    }

    async fn add_comment(&self, id: &TicketId) -> Result<Ticket> {
        let mut tickets = self.tickets.write().await;
        let ticket = tickets
            .get_mut(id)
            .ok_or_else(|| BoardError::UnknownTicket(id.to_string()))?;
        ticket.comments = ticket.comments.saturating_add(1);
        Ok(ticket.clone())
    }

    async fn delete(&self, id: &TicketId) -> Result<()> {
        self.tickets
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| BoardError::UnknownTicket(id.to_string()))
    }
}
