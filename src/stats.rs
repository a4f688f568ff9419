use serde::Serialize;

use crate::types::{Ticket, TicketStatus};

/// Fixed display value reported alongside the counters; not computed from
/// ticket data.
pub const AVG_RESPONSE_TIME: &str = "2.5 hours";

/// Aggregate counters for the stats cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub avg_response_time: String,
}

impl TicketStats {
    /// Count statuses in a single pass over the full store.
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        let mut open = 0;
        let mut in_progress = 0;
        let mut resolved = 0;

        for ticket in tickets {
            match ticket.status {
                TicketStatus::Open => open += 1,
                TicketStatus::InProgress => in_progress += 1,
                TicketStatus::Resolved => resolved += 1,
                TicketStatus::Waiting | TicketStatus::Closed => {}
            }
        }

        TicketStats {
            total: tickets.len(),
            open,
            in_progress,
            resolved,
            avg_response_time: AVG_RESPONSE_TIME.to_string(),
        }
    }
}
