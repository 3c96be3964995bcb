use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Ticket not found: {0}")]
    UnknownTicket(String),

    #[error("Unknown sort key '{0}'. Valid keys: id, title, description, priority, status, assignee, comments, created")]
    UnknownSortKey(String),

    #[error("Invalid ticket status: {0}")]
    InvalidStatus(String),

    #[error("Invalid ticket priority: {0}")]
    InvalidPriority(String),

    #[error("Board invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
