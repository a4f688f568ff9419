//! Filter/search pipeline for the ticket list.
//!
//! Filters compose as an unordered conjunction over the full ticket
//! sequence: every active filter must match, relative order is preserved,
//! and the whole thing is recomputed from scratch on each call. There is
//! no index and no memoization; the store holds at most a few thousand
//! tickets.

use std::convert::Infallible;
use std::str::FromStr;

use crate::auth::Session;
use crate::types::{Ticket, TicketCategory, TicketPriority, TicketStatus};

/// Context passed to filters containing shared state.
pub struct FilterContext {
    pub session: Option<Session>,
}

impl FilterContext {
    pub fn new(session: Option<&Session>) -> Self {
        Self {
            session: session.cloned(),
        }
    }
}

/// Trait for ticket filters.
pub trait TicketFilter {
    fn matches(&self, ticket: &Ticket, context: &FilterContext) -> bool;
}

/// Case-insensitive substring search over title, description, and id.
/// Any one match retains the ticket.
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }
}

impl TicketFilter for SearchFilter {
    fn matches(&self, ticket: &Ticket, _context: &FilterContext) -> bool {
        ticket.title.to_lowercase().contains(&self.needle)
            || ticket.description.to_lowercase().contains(&self.needle)
            || ticket.id.to_lowercase().contains(&self.needle)
    }
}

/// Filter tickets by exact status.
pub struct StatusFilter {
    target: TicketStatus,
}

impl StatusFilter {
    pub fn new(status: TicketStatus) -> Self {
        Self { target: status }
    }
}

impl TicketFilter for StatusFilter {
    fn matches(&self, ticket: &Ticket, _context: &FilterContext) -> bool {
        ticket.status == self.target
    }
}

/// Filter tickets by exact priority.
pub struct PriorityFilter {
    target: TicketPriority,
}

impl PriorityFilter {
    pub fn new(priority: TicketPriority) -> Self {
        Self { target: priority }
    }
}

impl TicketFilter for PriorityFilter {
    fn matches(&self, ticket: &Ticket, _context: &FilterContext) -> bool {
        ticket.priority == self.target
    }
}

/// Filter tickets by exact category.
pub struct CategoryFilter {
    target: TicketCategory,
}

impl CategoryFilter {
    pub fn new(category: TicketCategory) -> Self {
        Self { target: category }
    }
}

impl TicketFilter for CategoryFilter {
    fn matches(&self, ticket: &Ticket, _context: &FilterContext) -> bool {
        ticket.category == self.target
    }
}

/// The assignee constraint offered by the filter bar.
///
/// Values that are neither `unassigned` nor `me` fall through to literal
/// equality against the `assigned_to` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssigneeFilter {
    Unassigned,
    Me,
    Named(String),
}

impl FromStr for AssigneeFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "unassigned" => AssigneeFilter::Unassigned,
            "me" => AssigneeFilter::Me,
            other => AssigneeFilter::Named(other.to_string()),
        })
    }
}

/// Filter tickets by assignee.
pub struct AssignedToFilter {
    target: AssigneeFilter,
}

impl AssignedToFilter {
    pub fn new(target: AssigneeFilter) -> Self {
        Self { target }
    }
}

impl TicketFilter for AssignedToFilter {
    fn matches(&self, ticket: &Ticket, context: &FilterContext) -> bool {
        match &self.target {
            AssigneeFilter::Unassigned => ticket.assigned_to.is_none(),
            AssigneeFilter::Me => match (&ticket.assigned_to, &context.session) {
                (Some(assignee), Some(session)) => *assignee == session.email,
                _ => false,
            },
            AssigneeFilter::Named(name) => ticket.assigned_to.as_deref() == Some(name.as_str()),
        }
    }
}

/// The filter record driven by the filter bar: each field is either empty
/// (no constraint) or a concrete value. All set fields must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub category: Option<TicketCategory>,
    pub assigned_to: Option<AssigneeFilter>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of set fields (the filter bar's badge count).
    pub fn active_count(&self) -> usize {
        usize::from(self.status.is_some())
            + usize::from(self.priority.is_some())
            + usize::from(self.category.is_some())
            + usize::from(self.assigned_to.is_some())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A built query configuration that can be applied to a ticket sequence.
pub struct TicketQuery {
    filters: Vec<Box<dyn TicketFilter>>,
}

impl TicketQuery {
    /// Apply this query to the provided tickets, preserving their relative
    /// order. Filters compose as AND.
    pub fn apply<'a>(&self, tickets: &'a [Ticket], context: &FilterContext) -> Vec<&'a Ticket> {
        tickets
            .iter()
            .filter(|t| self.filters.iter().all(|f| f.matches(t, context)))
            .collect()
    }
}

/// Query builder for filtering tickets.
pub struct TicketQueryBuilder {
    filters: Vec<Box<dyn TicketFilter>>,
}

impl TicketQueryBuilder {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the query (AND composition).
    pub fn with_filter(mut self, filter: Box<dyn TicketFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn build(self) -> TicketQuery {
        TicketQuery {
            filters: self.filters,
        }
    }
}

impl Default for TicketQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The full pipeline: search plus filter criteria against the current
/// session. Empty search and empty criteria return the input unchanged,
/// in original order.
pub fn apply_filters<'a>(
    tickets: &'a [Ticket],
    search: &str,
    criteria: &FilterCriteria,
    session: Option<&Session>,
) -> Vec<&'a Ticket> {
    let mut builder = TicketQueryBuilder::new();

    if !search.is_empty() {
        builder = builder.with_filter(Box::new(SearchFilter::new(search)));
    }
    if let Some(status) = criteria.status {
        builder = builder.with_filter(Box::new(StatusFilter::new(status)));
    }
    if let Some(priority) = criteria.priority {
        builder = builder.with_filter(Box::new(PriorityFilter::new(priority)));
    }
    if let Some(category) = criteria.category {
        builder = builder.with_filter(Box::new(CategoryFilter::new(category)));
    }
    if let Some(assignee) = &criteria.assigned_to {
        builder = builder.with_filter(Box::new(AssignedToFilter::new(assignee.clone())));
    }

    let context = FilterContext::new(session);
    builder.build().apply(tickets, &context)
}
