pub mod board;
pub mod collection;
pub mod projection;
pub mod sorting;
pub mod ticket;
pub mod user;

pub use board::{
    Board, BoardConfig, Column, ColumnConfig, DragEnd, DragLocation, Location, MoveOutcome,
    TicketMove,
};
pub use collection::TicketCollection;
pub use projection::project;
pub use sorting::{sort_tickets, SortConfig, SortDirection, SortKey};
pub use ticket::{NewTicket, Priority, Ticket, TicketId, TicketStatus, TicketUpdate};
pub use user::{AuthContext, StaticAuthContext, User, UserDirectory, UserId};
