use crate::domain::ticket::{Ticket, TicketId};

/// The full set of tickets known to the UI, keyed by id.
///
/// Iteration follows insertion order, which is the input order the list
/// projection sorts from. Columns on the board refer into this collection by
/// id only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketCollection {
    tickets: Vec<Ticket>,
}

impl TicketCollection {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &TicketId) -> Option<usize> {
        self.tickets.iter().position(|t| &t.id == id)
    }

    pub fn get(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| &t.id == id)
    }

    pub fn get_mut(&mut self, id: &TicketId) -> Option<&mut Ticket> {
        self.tickets.iter_mut().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &TicketId) -> bool {
        self.position(id).is_some()
    }

    /// Inserts a ticket, replacing an existing ticket with the same id in
    /// place. Returns the replaced ticket.
    pub fn insert(&mut self, ticket: Ticket) -> Option<Ticket> {
        match self.position(&ticket.id) {
            Some(pos) => Some(std::mem::replace(&mut self.tickets[pos], ticket)),
            None => {
                self.tickets.push(ticket);
                None
            }
        }
    }

    pub fn remove(&mut self, id: &TicketId) -> Option<Ticket> {
        self.position(id).map(|pos| self.tickets.remove(pos))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ticket> {
        self.tickets.iter()
    }

    pub fn as_slice(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

impl FromIterator<Ticket> for TicketCollection {
    fn from_iter<I: IntoIterator<Item = Ticket>>(iter: I) -> Self {
        let mut collection = Self::new();
        for ticket in iter {
            collection.insert(ticket);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a TicketCollection {
    type Item = &'a Ticket;
    type IntoIter = std::slice::Iter<'a, Ticket>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
