use crate::domain::ticket::{Ticket, TicketStatus};
use crate::domain::user::UserId;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ticket attributes the list view can sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Title,
    Description,
    Priority,
    Status,
    Assignee,
    Comments,
    Created,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortKey {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "title" => Ok(SortKey::Title),
            "description" => Ok(SortKey::Description),
            "priority" => Ok(SortKey::Priority),
            "status" => Ok(SortKey::Status),
            "assignee" => Ok(SortKey::Assignee),
            "comments" => Ok(SortKey::Comments),
            "created" => Ok(SortKey::Created),
            _ => Err(BoardError::UnknownSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Id => "id",
            SortKey::Title => "title",
            SortKey::Description => "description",
            SortKey::Priority => "priority",
            SortKey::Status => "status",
            SortKey::Assignee => "assignee",
            SortKey::Comments => "comments",
            SortKey::Created => "created",
        };
        f.write_str(name)
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!(
                "Invalid sort direction '{}'. Valid directions: asc, desc",
                s
            )),
        }
    }
}

/// Active sort of the list view.
///
/// Requesting the active key again flips the direction; requesting a
/// different key switches to it in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Returns the state after the user asks to sort by `key`
    pub fn request(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.flipped())
        } else {
            Self::new(key, SortDirection::Asc)
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new(SortKey::Created, SortDirection::Desc)
    }
}

/// Compares two tickets by a single key in ascending order
pub fn compare_tickets(a: &Ticket, b: &Ticket, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.as_str().cmp(b.id.as_str()),
        SortKey::Title => compare_text(&a.title, &b.title),
        SortKey::Description => compare_text(&a.description, &b.description),
        SortKey::Priority => a.priority.cmp(&b.priority),
        SortKey::Status => compare_status(&a.status, &b.status),
        SortKey::Assignee => compare_assignees(a.assignee.as_ref(), b.assignee.as_ref()),
        SortKey::Comments => a.comments.cmp(&b.comments),
        SortKey::Created => a.created.cmp(&b.created),
    }
}

/// Sorts tickets in place. The sort is stable: tickets with equal keys keep
/// their relative input order in either direction.
pub fn sort_tickets<T: Borrow<Ticket>>(tickets: &mut [T], config: SortConfig) {
    tickets.sort_by(|a, b| {
        let cmp = compare_tickets(a.borrow(), b.borrow(), config.key);

        match config.direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });
}

/// Case-insensitive, falling back to a case-sensitive comparison so that
/// `"Login"` and `"login"` still have a fixed relative order.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Status order: Todo → InProgress → Review → Done
fn compare_status(a: &TicketStatus, b: &TicketStatus) -> Ordering {
    fn status_order(s: &TicketStatus) -> u8 {
        match s {
            TicketStatus::Todo => 0,
            TicketStatus::InProgress => 1,
            TicketStatus::Review => 2,
            TicketStatus::Done => 3,
        }
    }
    status_order(a).cmp(&status_order(b))
}

/// Unassigned tickets sort after assigned ones in ascending order
fn compare_assignees(a: Option<&UserId>, b: Option<&UserId>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
