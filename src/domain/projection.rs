//! List view derivation: sort the whole collection, then filter by search text.

use crate::domain::sorting::{sort_tickets, SortConfig};
use crate::domain::ticket::Ticket;

/// Produces the ordered, filtered sequence of tickets shown by the list view.
///
/// Sorting is applied to the full input first and filtering second, so the
/// result is always a subsequence of the sorted, unfiltered tickets. The
/// function is pure; identical inputs yield identical output.
///
/// # Examples
/// ```
/// use deskboard_core::domain::projection::project;
/// use deskboard_core::domain::sorting::{SortConfig, SortDirection, SortKey};
/// use deskboard_core::{Ticket, TicketId};
///
/// let tickets = vec![
///     Ticket::new(TicketId::new("t1"), "Zeta"),
///     Ticket::new(TicketId::new("t2"), "Alpha"),
///     Ticket::new(TicketId::new("t3"), "Mid"),
/// ];
///
/// let view = project(&tickets, SortConfig::new(SortKey::Title, SortDirection::Asc), "");
/// let titles: Vec<_> = view.iter().map(|t| t.title.as_str()).collect();
/// assert_eq!(titles, vec!["Alpha", "Mid", "Zeta"]);
/// ```
pub fn project<'a, I>(tickets: I, sort: SortConfig, search: &str) -> Vec<&'a Ticket>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    let mut sorted: Vec<&Ticket> = tickets.into_iter().collect();
    sort_tickets(&mut sorted, sort);

    let total = sorted.len();
    let filtered: Vec<&Ticket> = sorted
        .into_iter()
        .filter(|ticket| ticket.matches_search(search))
        .collect();

    tracing::debug!(
        key = %sort.key,
        direction = ?sort.direction,
        total,
        shown = filtered.len(),
        "projected ticket list"
    );

    filtered
}
