pub mod auth;
pub mod dashboard;
pub mod error;
pub mod query;
pub mod sample;
pub mod stats;
pub mod ticket;
pub mod types;
pub mod utils;

pub use auth::{AuthState, Session, StubAuth};
pub use dashboard::Dashboard;
pub use error::{DeskflowError, Result};
pub use query::{
    AssignedToFilter, AssigneeFilter, CategoryFilter, FilterContext, FilterCriteria,
    PriorityFilter, SearchFilter, StatusFilter, TicketFilter, TicketQuery, TicketQueryBuilder,
    apply_filters,
};
pub use sample::sample_tickets;
pub use stats::{AVG_RESPONSE_TIME, TicketStats};
pub use ticket::{TicketBuilder, TicketStore};
pub use types::{
    Ticket, TicketAttachment, TicketCategory, TicketComment, TicketPriority, TicketStatus,
    VALID_CATEGORIES, VALID_PRIORITIES, VALID_STATUSES,
};
