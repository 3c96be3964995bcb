//! # Deskboard Core
//!
//! Core logic for the Deskboard support ticket tracker.
//!
//! This crate provides the ticket model, the Kanban board ordering engine
//! used for drag-and-drop, and the sorted/filtered list projection, without
//! any dependency on a specific UI or transport. Durability is delegated to a
//! [`TicketStore`] implementation.

pub mod controller;
pub mod domain;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use controller::BoardController;
pub use domain::{
    board::{Board, BoardConfig, Column, DragEnd, Location, MoveOutcome, TicketMove},
    collection::TicketCollection,
    projection::project,
    sorting::{SortConfig, SortDirection, SortKey},
    ticket::{NewTicket, Priority, Ticket, TicketId, TicketStatus, TicketUpdate},
    user::{AuthContext, User, UserDirectory, UserId},
};
pub use error::{BoardError, Result};
pub use storage::{TicketFilter, TicketStats, TicketStore};
