use tracing::debug;

use crate::auth::Session;
use crate::error::Result;
use crate::query::{FilterCriteria, apply_filters};
use crate::sample::sample_tickets;
use crate::stats::TicketStats;
use crate::ticket::TicketBuilder;
use crate::types::Ticket;
use crate::utils;

/// In-memory store for tickets.
///
/// The store is an ordered sequence mutated only by prepending newly
/// created tickets, so most-recent-first ordering is emergent rather than
/// a stored sort key. Nothing is ever deleted or edited, and nothing
/// survives the process.
#[derive(Debug, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store seeded with the five demonstration tickets.
    pub fn with_sample_data() -> Self {
        TicketStore {
            tickets: sample_tickets(),
        }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Build the ticket described by `builder` and prepend it.
    ///
    /// Validation failure leaves the store unchanged. On the off chance
    /// the generated id collides with an existing one, a fresh id is
    /// drawn until it is unique.
    pub fn submit(&mut self, builder: TicketBuilder) -> Result<&Ticket> {
        let mut ticket = builder.build()?;
        while self.get(&ticket.id).is_some() {
            ticket.id = utils::generate_ticket_id();
        }

        debug!(id = %ticket.id, "ticket created");
        self.tickets.insert(0, ticket);
        Ok(&self.tickets[0])
    }

    /// Run the filter/search pipeline over the full store.
    pub fn filtered(
        &self,
        search: &str,
        criteria: &FilterCriteria,
        session: Option<&Session>,
    ) -> Vec<&Ticket> {
        apply_filters(&self.tickets, search, criteria, session)
    }

    pub fn stats(&self) -> TicketStats {
        TicketStats::from_tickets(&self.tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeskflowError;

    fn draft() -> TicketBuilder {
        TicketBuilder::new("A")
            .description("B")
            .category("Bug Report")
    }

    #[test]
    fn test_submit_prepends() {
        let mut store = TicketStore::with_sample_data();
        let before = store.len();

        let id = store.submit(draft()).unwrap().id.clone();

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.tickets()[0].id, id);
    }

    #[test]
    fn test_submit_failure_leaves_store_unchanged() {
        let mut store = TicketStore::with_sample_data();
        let before: Vec<String> = store.tickets().iter().map(|t| t.id.clone()).collect();

        let result = store.submit(TicketBuilder::new("").description("x").category("Bug Report"));
        assert!(matches!(result, Err(DeskflowError::MissingRequiredFields)));

        let after: Vec<String> = store.tickets().iter().map(|t| t.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_submissions_stay_most_recent_first() {
        let mut store = TicketStore::empty();
        let first = store.submit(draft()).unwrap().id.clone();
        let second = store.submit(draft()).unwrap().id.clone();

        let ids: Vec<_> = store.tickets().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec![second.as_str(), first.as_str()]);
    }

    #[test]
    fn test_get_by_id() {
        let store = TicketStore::with_sample_data();
        assert!(store.get("ticket_003").is_some());
        assert!(store.get("ticket_999").is_none());
    }

    #[test]
    fn test_ids_unique_after_many_submissions() {
        let mut store = TicketStore::empty();
        for _ in 0..50 {
            store.submit(draft()).unwrap();
        }
        let mut ids: Vec<_> = store.tickets().iter().map(|t| t.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }
}
