//! Mock data builders for creating test tickets without touching the
//! seeded sample set.

use deskflow::{Ticket, TicketCategory, TicketPriority, TicketStatus};

/// Builder for creating test tickets
pub struct TicketFixture {
    ticket: Ticket,
}

impl TicketFixture {
    /// Create a new ticket fixture with the given ID
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: id.to_string(),
                title: format!("Ticket {id}"),
                description: "test ticket".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.ticket.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.ticket.description = description.to_string();
        self
    }

    pub fn status(mut self, status: TicketStatus) -> Self {
        self.ticket.status = status;
        self
    }

    pub fn priority(mut self, priority: TicketPriority) -> Self {
        self.ticket.priority = priority;
        self
    }

    pub fn category(mut self, category: TicketCategory) -> Self {
        self.ticket.category = category;
        self
    }

    pub fn assigned_to(mut self, assignee: &str) -> Self {
        self.ticket.assigned_to = Some(assignee.to_string());
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// A small mixed store: varying statuses, priorities, categories, and
/// assignees, in a known order.
pub fn mixed_tickets() -> Vec<Ticket> {
    vec![
        TicketFixture::new("t-1")
            .title("Login broken")
            .status(TicketStatus::Open)
            .priority(TicketPriority::High)
            .category(TicketCategory::BugReport)
            .assigned_to("dev@example.com")
            .build(),
        TicketFixture::new("t-2")
            .title("Dark mode")
            .status(TicketStatus::InProgress)
            .priority(TicketPriority::Medium)
            .category(TicketCategory::FeatureRequest)
            .assigned_to("UI Team")
            .build(),
        TicketFixture::new("t-3")
            .title("Timeout in production")
            .status(TicketStatus::Open)
            .priority(TicketPriority::Critical)
            .category(TicketCategory::TechnicalSupport)
            .build(),
        TicketFixture::new("t-4")
            .title("Password reset")
            .status(TicketStatus::Resolved)
            .priority(TicketPriority::Medium)
            .category(TicketCategory::AccountIssue)
            .assigned_to("dev@example.com")
            .build(),
        TicketFixture::new("t-5")
            .title("Slow on mobile")
            .status(TicketStatus::Waiting)
            .priority(TicketPriority::Low)
            .category(TicketCategory::PerformanceIssue)
            .build(),
    ]
}
