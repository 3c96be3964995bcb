use crate::domain::collection::TicketCollection;
use crate::domain::sorting::SortConfig;
use crate::domain::ticket::{Ticket, TicketId, TicketStatus};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

/// Title configuration for one board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub status: TicketStatus,
    pub title: String,
}

impl ColumnConfig {
    pub fn new(status: TicketStatus, title: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "BoardConfig::default_name")]
    pub name: String,
    #[serde(default = "BoardConfig::default_columns")]
    pub columns: Vec<ColumnConfig>,
    #[serde(default)]
    pub default_sort: SortConfig,
}

impl BoardConfig {
    fn default_name() -> String {
        "Support Board".to_string()
    }

    fn default_columns() -> Vec<ColumnConfig> {
        TicketStatus::ALL
            .into_iter()
            .map(|status| ColumnConfig::new(status, status.to_string()))
            .collect()
    }

    /// Parses a JSON configuration and checks that every status has exactly
    /// one column
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.status) {
                return Err(BoardError::Config(format!(
                    "column '{}' is configured more than once",
                    column.status.as_str()
                )));
            }
        }
        if let Some(missing) = TicketStatus::ALL.iter().find(|s| !seen.contains(*s)) {
            return Err(BoardError::Config(format!(
                "no column configured for status '{}'",
                missing.as_str()
            )));
        }
        Ok(())
    }

    /// Configured title for a status, falling back to its display label
    pub fn title_for(&self, status: TicketStatus) -> String {
        self.columns
            .iter()
            .find(|col| col.status == status)
            .map(|col| col.title.clone())
            .unwrap_or_else(|| status.to_string())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            columns: Self::default_columns(),
            default_sort: SortConfig::default(),
        }
    }
}

/// A board column: the ordered ids of the tickets whose status it represents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: TicketStatus,
    pub title: String,
    pub ticket_ids: Vec<TicketId>,
}

impl Column {
    pub fn new(id: TicketStatus, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ticket_ids: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.ticket_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticket_ids.is_empty()
    }

    pub fn position(&self, id: &TicketId) -> Option<usize> {
        self.ticket_ids.iter().position(|t| t == id)
    }
}

/// A position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub column: TicketStatus,
    pub index: usize,
}

impl Location {
    pub fn new(column: TicketStatus, index: usize) -> Self {
        Self { column, index }
    }
}

/// A drag-and-drop move of one ticket between two board positions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketMove {
    pub ticket_id: TicketId,
    pub source: Location,
    pub destination: Location,
}

impl TicketMove {
    pub fn new(ticket_id: TicketId, source: Location, destination: Location) -> Self {
        Self {
            ticket_id,
            source,
            destination,
        }
    }

    /// The move that undoes this one once it has been applied
    pub fn inverse(&self) -> Self {
        Self::new(self.ticket_id.clone(), self.destination, self.source)
    }

    pub fn is_noop(&self) -> bool {
        self.source == self.destination
    }

    pub fn is_transfer(&self) -> bool {
        self.source.column != self.destination.column
    }
}

/// What an applied move did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Source and destination were identical
    Unchanged,
    /// The ticket changed position within one column
    Reordered {
        column: TicketStatus,
        from: usize,
        to: usize,
    },
    /// The ticket moved to another column and its status now names that column
    Transferred { from: Location, to: Location },
}

/// One end of a drag gesture as reported by the UI, with a raw column id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragLocation {
    pub column_id: String,
    pub index: usize,
}

/// Drag-end event forwarded by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEnd {
    pub ticket_id: String,
    pub source: DragLocation,
    /// `None` when the ticket was dropped outside every column
    #[serde(default)]
    pub destination: Option<DragLocation>,
}

impl DragEnd {
    /// Resolves the raw column ids. A drop outside the board yields `None`.
    pub fn into_move(self) -> Result<Option<TicketMove>> {
        let Some(destination) = self.destination else {
            return Ok(None);
        };
        let source = resolve_location(&self.source)?;
        let destination = resolve_location(&destination)?;
        Ok(Some(TicketMove::new(
            TicketId::new(self.ticket_id),
            source,
            destination,
        )))
    }
}

fn resolve_location(location: &DragLocation) -> Result<Location> {
    let column = TicketStatus::from_str(&location.column_id)
        .map_err(|_| BoardError::InvalidMove(format!("unknown column '{}'", location.column_id)))?;
    Ok(Location::new(column, location.index))
}

/// Kanban board state: one column per status, each holding ticket ids in
/// display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    columns: BTreeMap<TicketStatus, Column>,
}

impl Board {
    /// Creates a board with every column empty
    pub fn new(config: &BoardConfig) -> Self {
        let columns = TicketStatus::ALL
            .into_iter()
            .map(|status| (status, Column::new(status, config.title_for(status))))
            .collect();
        Self {
            name: config.name.clone(),
            columns,
        }
    }

    /// Creates a board placing each ticket at the end of its status column,
    /// in collection order
    pub fn from_tickets(config: &BoardConfig, tickets: &TicketCollection) -> Self {
        let mut board = Self::new(config);
        for ticket in tickets {
            board.insert_ticket(ticket);
        }
        board
    }

    pub fn column(&self, status: TicketStatus) -> Option<&Column> {
        self.columns.get(&status)
    }

    /// Columns in workflow order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// Finds the column and index currently holding a ticket
    pub fn locate(&self, id: &TicketId) -> Option<Location> {
        self.columns.values().find_map(|col| {
            col.position(id)
                .map(|index| Location::new(col.id, index))
        })
    }

    /// Appends a ticket to the column named by its status. A ticket already
    /// on the board is left where it is.
    pub fn insert_ticket(&mut self, ticket: &Ticket) -> Option<Location> {
        if let Some(existing) = self.locate(&ticket.id) {
            return Some(existing);
        }
        let column = self.columns.get_mut(&ticket.status)?;
        column.ticket_ids.push(ticket.id.clone());
        Some(Location::new(column.id, column.len() - 1))
    }

    /// Removes a ticket id from whichever column holds it
    pub fn remove_ticket(&mut self, id: &TicketId) -> Option<Location> {
        let location = self.locate(id)?;
        if let Some(column) = self.columns.get_mut(&location.column) {
            column.ticket_ids.remove(location.index);
        }
        Some(location)
    }

    /// Moves a ticket whose status was edited to the end of its new column
    pub fn relocate(&mut self, ticket: &Ticket) -> Option<Location> {
        match self.locate(&ticket.id) {
            Some(current) if current.column == ticket.status => Some(current),
            Some(_) => {
                self.remove_ticket(&ticket.id);
                self.insert_ticket(ticket)
            }
            None => self.insert_ticket(ticket),
        }
    }

    /// Total number of ticket ids across all columns
    pub fn ticket_count(&self) -> usize {
        self.columns.values().map(Column::len).sum()
    }

    /// Applies a drag-and-drop move.
    ///
    /// All preconditions are checked before anything is written, so on error
    /// neither the board nor the ticket collection has changed. A
    /// cross-column transfer also sets the ticket's status to the destination
    /// column.
    pub fn move_ticket(
        &mut self,
        tickets: &mut TicketCollection,
        mv: &TicketMove,
    ) -> Result<MoveOutcome> {
        let source = self.columns.get(&mv.source.column).ok_or_else(|| {
            BoardError::InvalidMove(format!("unknown column '{}'", mv.source.column.as_str()))
        })?;
        let destination = self.columns.get(&mv.destination.column).ok_or_else(|| {
            BoardError::InvalidMove(format!(
                "unknown column '{}'",
                mv.destination.column.as_str()
            ))
        })?;

        match source.ticket_ids.get(mv.source.index) {
            Some(id) if id == &mv.ticket_id => {}
            Some(id) => {
                return Err(BoardError::InvalidMove(format!(
                    "expected {} at {}[{}], found {}",
                    mv.ticket_id,
                    source.id.as_str(),
                    mv.source.index,
                    id
                )))
            }
            None => {
                return Err(BoardError::InvalidMove(format!(
                    "source index {} is out of range for column '{}' of length {}",
                    mv.source.index,
                    source.id.as_str(),
                    source.len()
                )))
            }
        }

        // Same-column indices refer to the sequence after removal.
        let max_index = if mv.is_transfer() {
            destination.len()
        } else {
            source.len() - 1
        };
        if mv.destination.index > max_index {
            return Err(BoardError::InvalidMove(format!(
                "destination index {} exceeds {} for column '{}'",
                mv.destination.index,
                max_index,
                destination.id.as_str()
            )));
        }

        if mv.is_noop() {
            return Ok(MoveOutcome::Unchanged);
        }

        if !mv.is_transfer() {
            let ids = self.ticket_ids_mut(mv.source.column)?;
            let id = ids.remove(mv.source.index);
            ids.insert(mv.destination.index, id);

            tracing::debug!(
                ticket = %mv.ticket_id,
                column = mv.source.column.as_str(),
                from = mv.source.index,
                to = mv.destination.index,
                "reordered ticket"
            );
            return Ok(MoveOutcome::Reordered {
                column: mv.source.column,
                from: mv.source.index,
                to: mv.destination.index,
            });
        }

        let ticket = tickets
            .get_mut(&mv.ticket_id)
            .ok_or_else(|| BoardError::UnknownTicket(mv.ticket_id.to_string()))?;
        ticket.status = mv.destination.column;

        let id = self.ticket_ids_mut(mv.source.column)?.remove(mv.source.index);
        self.ticket_ids_mut(mv.destination.column)?
            .insert(mv.destination.index, id);

        tracing::debug!(
            ticket = %mv.ticket_id,
            from = mv.source.column.as_str(),
            to = mv.destination.column.as_str(),
            index = mv.destination.index,
            "transferred ticket"
        );
        Ok(MoveOutcome::Transferred {
            from: mv.source,
            to: mv.destination,
        })
    }

    fn ticket_ids_mut(&mut self, status: TicketStatus) -> Result<&mut Vec<TicketId>> {
        self.columns
            .get_mut(&status)
            .map(|col| &mut col.ticket_ids)
            .ok_or_else(|| BoardError::InvalidMove(format!("unknown column '{}'", status.as_str())))
    }

    /// Checks that every ticket sits in exactly one column, that the column
    /// matches its status, and that no column references a missing ticket
    pub fn verify(&self, tickets: &TicketCollection) -> Result<()> {
        let mut seen: HashSet<&TicketId> = HashSet::new();

        for column in self.columns.values() {
            for id in &column.ticket_ids {
                if !seen.insert(id) {
                    return Err(BoardError::InvariantViolation(format!(
                        "ticket {} appears more than once on the board",
                        id
                    )));
                }
                let ticket = tickets.get(id).ok_or_else(|| {
                    BoardError::InvariantViolation(format!(
                        "column '{}' references missing ticket {}",
                        column.id.as_str(),
                        id
                    ))
                })?;
                if ticket.status != column.id {
                    return Err(BoardError::InvariantViolation(format!(
                        "ticket {} has status '{}' but sits in column '{}'",
                        id,
                        ticket.status.as_str(),
                        column.id.as_str()
                    )));
                }
            }
        }

        if let Some(missing) = tickets.iter().find(|t| !seen.contains(&t.id)) {
            return Err(BoardError::InvariantViolation(format!(
                "ticket {} is not on the board",
                missing.id
            )));
        }

        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, status: TicketStatus) -> Ticket {
        Ticket::new(TicketId::new(id), id).with_status(status)
    }

    /// todo: [t1, t2, t3], inProgress: [t4], review: [], done: [t5]
    fn fixture() -> (Board, TicketCollection) {
        let tickets: TicketCollection = vec![
            ticket("t1", TicketStatus::Todo),
            ticket("t2", TicketStatus::Todo),
            ticket("t3", TicketStatus::Todo),
            ticket("t4", TicketStatus::InProgress),
            ticket("t5", TicketStatus::Done),
        ]
        .into_iter()
        .collect();
        let board = Board::from_tickets(&BoardConfig::default(), &tickets);
        (board, tickets)
    }

    fn ids(board: &Board, status: TicketStatus) -> Vec<&str> {
        board
            .column(status)
            .unwrap()
            .ticket_ids
            .iter()
            .map(TicketId::as_str)
            .collect()
    }

    fn mv(id: &str, from: (TicketStatus, usize), to: (TicketStatus, usize)) -> TicketMove {
        TicketMove::new(
            TicketId::new(id),
            Location::new(from.0, from.1),
            Location::new(to.0, to.1),
        )
    }

    #[test]
    fn test_board_from_tickets() {
        let (board, tickets) = fixture();
        assert_eq!(ids(&board, TicketStatus::Todo), vec!["t1", "t2", "t3"]);
        assert_eq!(ids(&board, TicketStatus::InProgress), vec!["t4"]);
        assert!(board.column(TicketStatus::Review).unwrap().is_empty());
        assert_eq!(board.ticket_count(), 5);
        board.verify(&tickets).unwrap();
    }

    #[test]
    fn test_columns_in_workflow_order() {
        let board = Board::default();
        let order: Vec<_> = board.columns().map(|c| c.id).collect();
        assert_eq!(order, TicketStatus::ALL.to_vec());
        assert_eq!(board.column(TicketStatus::InProgress).unwrap().title, "In Progress");
    }

    #[test]
    fn test_transfer_to_empty_column() {
        let (mut board, mut tickets) = fixture();

        let outcome = board
            .move_ticket(
                &mut tickets,
                &mv("t2", (TicketStatus::Todo, 1), (TicketStatus::Review, 0)),
            )
            .unwrap();

        assert!(matches!(outcome, MoveOutcome::Transferred { .. }));
        assert_eq!(ids(&board, TicketStatus::Todo), vec!["t1", "t3"]);
        assert_eq!(ids(&board, TicketStatus::Review), vec!["t2"]);
        assert_eq!(
            tickets.get(&TicketId::new("t2")).unwrap().status,
            TicketStatus::Review
        );
        board.verify(&tickets).unwrap();
    }

    #[test]
    fn test_transfer_leaves_other_fields_alone() {
        let (mut board, mut tickets) = fixture();
        let before = tickets.get(&TicketId::new("t4")).unwrap().clone();

        board
            .move_ticket(
                &mut tickets,
                &mv("t4", (TicketStatus::InProgress, 0), (TicketStatus::Done, 1)),
            )
            .unwrap();

        let after = tickets.get(&TicketId::new("t4")).unwrap();
        assert_eq!(ids(&board, TicketStatus::Done), vec!["t5", "t4"]);
        assert_eq!(after.status, TicketStatus::Done);
        assert_eq!(after.title, before.title);
        assert_eq!(after.priority, before.priority);
        assert_eq!(after.comments, before.comments);
        assert_eq!(after.created, before.created);
    }

    #[test]
    fn test_reorder_within_column() {
        let (mut board, mut tickets) = fixture();

        let outcome = board
            .move_ticket(
                &mut tickets,
                &mv("t1", (TicketStatus::Todo, 0), (TicketStatus::Todo, 2)),
            )
            .unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Reordered {
                column: TicketStatus::Todo,
                from: 0,
                to: 2
            }
        );
        assert_eq!(ids(&board, TicketStatus::Todo), vec!["t2", "t3", "t1"]);
    }

    #[test]
    fn test_reorder_upwards() {
        let (mut board, mut tickets) = fixture();

        board
            .move_ticket(
                &mut tickets,
                &mv("t3", (TicketStatus::Todo, 2), (TicketStatus::Todo, 0)),
            )
            .unwrap();

        assert_eq!(ids(&board, TicketStatus::Todo), vec!["t3", "t1", "t2"]);
    }

    #[test]
    fn test_same_position_is_noop() {
        let (mut board, mut tickets) = fixture();
        let (board_before, tickets_before) = (board.clone(), tickets.clone());

        let outcome = board
            .move_ticket(
                &mut tickets,
                &mv("t2", (TicketStatus::Todo, 1), (TicketStatus::Todo, 1)),
            )
            .unwrap();

        assert_eq!(outcome, MoveOutcome::Unchanged);
        assert_eq!(board, board_before);
        assert_eq!(tickets, tickets_before);
    }

    #[test]
    fn test_same_slot_move_is_validated_before_noop() {
        let (mut board, mut tickets) = fixture();
        let (board_before, tickets_before) = (board.clone(), tickets.clone());

        // t1 sits at todo[0], not t2
        let wrong_ticket = board.move_ticket(
            &mut tickets,
            &mv("t2", (TicketStatus::Todo, 0), (TicketStatus::Todo, 0)),
        );
        assert!(matches!(wrong_ticket, Err(BoardError::InvalidMove(_))));

        let out_of_range = board.move_ticket(
            &mut tickets,
            &mv("t1", (TicketStatus::Todo, 9), (TicketStatus::Todo, 9)),
        );
        assert!(matches!(out_of_range, Err(BoardError::InvalidMove(_))));

        assert_eq!(board, board_before);
        assert_eq!(tickets, tickets_before);
    }

    #[test]
    fn test_stale_source_index_is_rejected() {
        let (mut board, mut tickets) = fixture();
        let (board_before, tickets_before) = (board.clone(), tickets.clone());

        let err = board
            .move_ticket(
                &mut tickets,
                &mv("t2", (TicketStatus::Todo, 0), (TicketStatus::Review, 0)),
            )
            .unwrap_err();

        assert!(matches!(err, BoardError::InvalidMove(_)));
        assert_eq!(board, board_before);
        assert_eq!(tickets, tickets_before);
    }

    #[test]
    fn test_source_index_out_of_range() {
        let (mut board, mut tickets) = fixture();
        let err = board
            .move_ticket(
                &mut tickets,
                &mv("t1", (TicketStatus::Todo, 7), (TicketStatus::Done, 0)),
            )
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidMove(_)));
    }

    #[test]
    fn test_destination_index_out_of_range() {
        let (mut board, mut tickets) = fixture();
        let board_before = board.clone();

        // Same column: after removal there are only indices 0..=2.
        let err = board
            .move_ticket(
                &mut tickets,
                &mv("t1", (TicketStatus::Todo, 0), (TicketStatus::Todo, 3)),
            )
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidMove(_)));

        // Other column: appending at len is allowed, len + 1 is not.
        let err = board
            .move_ticket(
                &mut tickets,
                &mv("t1", (TicketStatus::Todo, 0), (TicketStatus::InProgress, 2)),
            )
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidMove(_)));
        assert_eq!(board, board_before);

        board
            .move_ticket(
                &mut tickets,
                &mv("t1", (TicketStatus::Todo, 0), (TicketStatus::InProgress, 1)),
            )
            .unwrap();
        assert_eq!(ids(&board, TicketStatus::InProgress), vec!["t4", "t1"]);
    }

    #[test]
    fn test_transfer_of_unknown_ticket_is_rejected() {
        let (mut board, mut tickets) = fixture();
        tickets.remove(&TicketId::new("t1"));
        let board_before = board.clone();

        let err = board
            .move_ticket(
                &mut tickets,
                &mv("t1", (TicketStatus::Todo, 0), (TicketStatus::Done, 0)),
            )
            .unwrap_err();

        assert!(matches!(err, BoardError::UnknownTicket(id) if id == "t1"));
        assert_eq!(board, board_before);
    }

    #[test]
    fn test_inverse_restores_state() {
        let (mut board, mut tickets) = fixture();
        let (board_before, tickets_before) = (board.clone(), tickets.clone());
        let forward = mv("t3", (TicketStatus::Todo, 2), (TicketStatus::InProgress, 0));

        board.move_ticket(&mut tickets, &forward).unwrap();
        board.move_ticket(&mut tickets, &forward.inverse()).unwrap();

        assert_eq!(board, board_before);
        assert_eq!(tickets, tickets_before);
    }

    #[test]
    fn test_insert_remove_and_relocate() {
        let (mut board, mut tickets) = fixture();

        let new_ticket = ticket("t6", TicketStatus::Todo);
        tickets.insert(new_ticket.clone());
        assert_eq!(
            board.insert_ticket(&new_ticket),
            Some(Location::new(TicketStatus::Todo, 3))
        );
        // Inserting twice keeps the id unique.
        board.insert_ticket(&new_ticket);
        assert_eq!(ids(&board, TicketStatus::Todo), vec!["t1", "t2", "t3", "t6"]);

        let edited = tickets.get_mut(&TicketId::new("t1")).unwrap();
        edited.status = TicketStatus::Review;
        let edited = edited.clone();
        assert_eq!(
            board.relocate(&edited),
            Some(Location::new(TicketStatus::Review, 0))
        );
        board.verify(&tickets).unwrap();

        assert_eq!(
            board.remove_ticket(&TicketId::new("t3")),
            Some(Location::new(TicketStatus::Todo, 1))
        );
        assert_eq!(board.remove_ticket(&TicketId::new("t3")), None);
    }

    #[test]
    fn test_verify_reports_status_mismatch() {
        let (board, mut tickets) = fixture();
        tickets.get_mut(&TicketId::new("t5")).unwrap().status = TicketStatus::Todo;

        assert!(matches!(
            board.verify(&tickets),
            Err(BoardError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_verify_reports_missing_ticket() {
        let (board, mut tickets) = fixture();
        tickets.insert(ticket("orphan", TicketStatus::Todo));

        assert!(matches!(
            board.verify(&tickets),
            Err(BoardError::InvariantViolation(msg)) if msg.contains("orphan")
        ));
    }

    #[test]
    fn test_drag_end_resolution() {
        let json = r#"{
            "ticketId": "t2",
            "source": { "columnId": "todo", "index": 1 },
            "destination": { "columnId": "inProgress", "index": 0 }
        }"#;
        let drag: DragEnd = serde_json::from_str(json).unwrap();
        let resolved = drag.into_move().unwrap().unwrap();
        assert_eq!(
            resolved,
            mv("t2", (TicketStatus::Todo, 1), (TicketStatus::InProgress, 0))
        );

        let dropped_outside: DragEnd =
            serde_json::from_str(r#"{"ticketId":"t2","source":{"columnId":"todo","index":1}}"#)
                .unwrap();
        assert_eq!(dropped_outside.into_move().unwrap(), None);

        let bogus = DragEnd {
            ticket_id: "t2".to_string(),
            source: DragLocation {
                column_id: "backlog".to_string(),
                index: 0,
            },
            destination: Some(DragLocation {
                column_id: "todo".to_string(),
                index: 0,
            }),
        };
        assert!(matches!(bogus.into_move(), Err(BoardError::InvalidMove(_))));
    }

    #[test]
    fn test_config_from_json() {
        let config = BoardConfig::from_json_str(
            r#"{
                "name": "Helpdesk",
                "columns": [
                    { "status": "todo", "title": "Por Hacer" },
                    { "status": "inProgress", "title": "En Progreso" },
                    { "status": "review", "title": "Revisión" },
                    { "status": "done", "title": "Completado" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.default_sort, SortConfig::default());
        let board = Board::new(&config);
        assert_eq!(board.name, "Helpdesk");
        assert_eq!(board.column(TicketStatus::Done).unwrap().title, "Completado");
    }

    #[test]
    fn test_config_rejects_missing_column() {
        let err = BoardConfig::from_json_str(
            r#"{ "columns": [ { "status": "todo", "title": "Todo" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));

        let err = BoardConfig::from_json_str(
            r#"{ "columns": [
                { "status": "todo", "title": "A" },
                { "status": "todo", "title": "B" },
                { "status": "inProgress", "title": "C" },
                { "status": "review", "title": "D" },
                { "status": "done", "title": "E" }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::Config(msg) if msg.contains("more than once")));
    }
}
