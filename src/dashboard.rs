//! Host-facing glue tying the store, pipeline, and stats together.
//!
//! The presentation layer owns the event loop; it pushes input changes
//! into the `Dashboard` and re-reads `visible_tickets` / `stats` after
//! each change. Reads recompute from current inputs, so a submission's
//! effects (new ticket visible, stats updated, filters reapplied) are
//! visible atomically to the next read.

use tracing::warn;

use crate::auth::Session;
use crate::error::{DeskflowError, Result};
use crate::query::FilterCriteria;
use crate::stats::TicketStats;
use crate::ticket::{TicketBuilder, TicketStore};
use crate::types::Ticket;

pub struct Dashboard {
    store: TicketStore,
    search_query: String,
    filters: FilterCriteria,
    session: Option<Session>,
}

impl Dashboard {
    pub fn new(store: TicketStore) -> Self {
        Dashboard {
            store,
            search_query: String::new(),
            filters: FilterCriteria::default(),
            session: None,
        }
    }

    pub fn store(&self) -> &TicketStore {
        &self.store
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    pub fn search(&self) -> &str {
        &self.search_query
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterCriteria {
        &mut self.filters
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// The ordered subsequence of tickets satisfying the current search
    /// and filters, recomputed on every call.
    pub fn visible_tickets(&self) -> Vec<&Ticket> {
        self.store
            .filtered(&self.search_query, &self.filters, self.session.as_ref())
    }

    /// Visible tickets serialized for the presentation layer.
    pub fn visible_tickets_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.visible_tickets())?)
    }

    pub fn stats(&self) -> TicketStats {
        self.store.stats()
    }

    pub fn stats_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.stats())?)
    }

    /// Submit a new ticket on behalf of the signed-in user.
    ///
    /// Requires a session; the submitter identity always comes from it.
    /// Validation failures surface as-is so the form can prompt for the
    /// missing fields. Anything else collapses into the generic
    /// retry-prompting error.
    pub fn submit(&mut self, builder: TicketBuilder) -> Result<String> {
        let Some(session) = self.session.clone() else {
            return Err(DeskflowError::NotSignedIn);
        };

        match self.store.submit(builder.submitted_by(Some(&session))) {
            Ok(ticket) => Ok(ticket.id.clone()),
            Err(DeskflowError::MissingRequiredFields) => {
                Err(DeskflowError::MissingRequiredFields)
            }
            Err(err) => {
                warn!(%err, "ticket submission failed");
                Err(DeskflowError::SubmissionFailed)
            }
        }
    }
}
