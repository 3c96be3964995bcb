//! Single owner of the UI state shared by the board and list views.
//!
//! The controller holds the ticket collection, the board ordering and the
//! list view settings. Gestures come in as plain values; moves and
//! projections run synchronously, and only persistence goes through the
//! [`TicketStore`].

use crate::{
    domain::{
        project, AuthContext, Board, BoardConfig, DragEnd, MoveOutcome, NewTicket, SortConfig,
        SortKey, Ticket, TicketCollection, TicketId, TicketMove, TicketStatus, TicketUpdate, User,
        UserDirectory,
    },
    error::{BoardError, Result},
    storage::{TicketFilter, TicketStore},
};
use std::str::FromStr;

pub struct BoardController<S> {
    store: S,
    tickets: TicketCollection,
    board: Board,
    sort: SortConfig,
    search: String,
}

impl<S: TicketStore> BoardController<S> {
    /// Loads every ticket from the store and lays them out on a fresh board
    pub async fn load(store: S, config: BoardConfig) -> Result<Self> {
        config.validate()?;
        let tickets: TicketCollection = store.list(&TicketFilter::all()).await?.into_iter().collect();
        let board = Board::from_tickets(&config, &tickets);

        tracing::info!(tickets = tickets.len(), board = %board.name, "loaded board");
        Ok(Self {
            store,
            tickets,
            board,
            sort: config.default_sort,
            search: String::new(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tickets(&self) -> &TicketCollection {
        &self.tickets
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Handles a click on a sortable list header
    pub fn request_sort(&mut self, key: SortKey) -> SortConfig {
        self.sort = self.sort.request(key);
        self.sort
    }

    /// Like [`request_sort`](Self::request_sort) for a key name coming from
    /// the UI. Unknown names leave the sort unchanged.
    pub fn request_sort_by_name(&mut self, key: &str) -> Result<SortConfig> {
        let key = SortKey::from_str(key)?;
        Ok(self.request_sort(key))
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Tickets shown by the list view under the current sort and search
    pub fn list_view(&self) -> Vec<&Ticket> {
        project(&self.tickets, self.sort, &self.search)
    }

    /// Tickets of one board column in display order
    pub fn column_view(&self, status: TicketStatus) -> Vec<&Ticket> {
        self.board
            .column(status)
            .map(|col| {
                col.ticket_ids
                    .iter()
                    .filter_map(|id| self.tickets.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Applies a drag-end gesture. Drops outside the board change nothing.
    pub async fn handle_drag(&mut self, drag: DragEnd) -> Result<MoveOutcome> {
        match drag.into_move()? {
            Some(mv) => self.apply_move(mv).await,
            None => Ok(MoveOutcome::Unchanged),
        }
    }

    /// Applies a move locally, then persists the status of a transferred
    /// ticket. If the store rejects the status the move is undone and the
    /// store error returned.
    pub async fn apply_move(&mut self, mv: TicketMove) -> Result<MoveOutcome> {
        let outcome = self.board.move_ticket(&mut self.tickets, &mv)?;

        if let MoveOutcome::Transferred { to, .. } = outcome {
            match self.store.update_status(&mv.ticket_id, to.column).await {
                Ok(stored) => {
                    tracing::info!(
                        ticket = %mv.ticket_id,
                        status = to.column.as_str(),
                        "persisted ticket status"
                    );
                    self.board.relocate(&stored);
                    self.tickets.insert(stored);
                }
                Err(error) => {
                    tracing::warn!(
                        ticket = %mv.ticket_id,
                        %error,
                        "status update failed, rolling back move"
                    );
                    self.board.move_ticket(&mut self.tickets, &mv.inverse())?;
                    return Err(error);
                }
            }
        }

        Ok(outcome)
    }

    /// Creates a ticket through the store and appends it to the `todo` column
    pub async fn create_ticket(&mut self, fields: NewTicket) -> Result<Ticket> {
        let ticket = self.store.create(fields).await?;
        self.board.insert_ticket(&ticket);
        self.tickets.insert(ticket.clone());

        tracing::info!(ticket = %ticket.id, "created ticket");
        Ok(ticket)
    }

    /// Updates a ticket through the store. A status change moves the ticket
    /// to the end of its new column.
    pub async fn update_ticket(&mut self, id: &TicketId, fields: TicketUpdate) -> Result<Ticket> {
        let ticket = self.store.update(id, fields).await?;
        self.board.relocate(&ticket);
        self.tickets.insert(ticket.clone());
        Ok(ticket)
    }

    /// Records a comment. Backends may move the ticket as a side effect, so
    /// the returned status is honoured the same way as in `update_ticket`.
    pub async fn add_comment(&mut self, id: &TicketId) -> Result<Ticket> {
        let ticket = self.store.add_comment(id).await?;
        self.board.relocate(&ticket);
        self.tickets.insert(ticket.clone());
        Ok(ticket)
    }

    /// Deletes a ticket through the store and drops it from its column
    pub async fn delete_ticket(&mut self, id: &TicketId) -> Result<()> {
        self.store.delete(id).await?;
        self.tickets.remove(id);
        self.board.remove_ticket(id);

        tracing::info!(ticket = %id, "deleted ticket");
        Ok(())
    }

    /// Resolves a ticket's assignee. `Ok(None)` covers both unassigned
    /// tickets and assignees missing from the directory.
    pub fn assignee<'u>(&self, id: &TicketId, users: &'u UserDirectory) -> Result<Option<&'u User>> {
        let ticket = self
            .tickets
            .get(id)
            .ok_or_else(|| BoardError::UnknownTicket(id.to_string()))?;

        let Some(assignee) = ticket.assignee.as_ref() else {
            return Ok(None);
        };
        let user = users.get(assignee);
        if user.is_none() {
            tracing::warn!(ticket = %id, assignee = %assignee, "assignee not found");
        }
        Ok(user)
    }

    /// Tickets assigned to the signed-in user, in list view order
    pub fn my_tickets(&self, auth: &dyn AuthContext) -> Vec<&Ticket> {
        let Some(user) = auth.current_user() else {
            return Vec::new();
        };
        self.list_view()
            .into_iter()
            .filter(|t| t.assignee.as_ref() == Some(&user.id))
            .collect()
    }
}
