mod builder;
mod store;

pub use builder::TicketBuilder;
pub use store::TicketStore;
