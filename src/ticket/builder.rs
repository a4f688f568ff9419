use std::str::FromStr;

use tracing::debug;

use crate::auth::Session;
use crate::error::{DeskflowError, Result};
use crate::types::{Ticket, TicketCategory, TicketPriority, TicketStatus};
use crate::utils;

/// Builder for new tickets from submission-form input.
///
/// Title, description, and category are required (non-empty after
/// trimming); priority defaults to medium. Validation happens in `build`,
/// so a rejected submission has no partial effect anywhere.
pub struct TicketBuilder {
    title: String,
    description: String,
    category: String,
    priority: Option<String>,
    assigned_to: Option<String>,
    attachments: Vec<String>,
    session: Option<Session>,
}

impl TicketBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        TicketBuilder {
            title: title.into(),
            description: String::new(),
            category: String::new(),
            priority: None,
            assigned_to: None,
            attachments: Vec::new(),
            session: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn assigned_to(mut self, assigned_to: Option<impl Into<String>>) -> Self {
        self.assigned_to = assigned_to.map(|a| a.into());
        self
    }

    /// Opaque file handles from the form. Nothing opens, sizes, or
    /// persists them; there is no upload target.
    pub fn attachments(mut self, attachments: Vec<String>) -> Self {
        self.attachments = attachments;
        self
    }

    pub fn submitted_by(mut self, session: Option<&Session>) -> Self {
        self.session = session.cloned();
        self
    }

    pub fn build(self) -> Result<Ticket> {
        if self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.category.trim().is_empty()
        {
            return Err(DeskflowError::MissingRequiredFields);
        }

        let category = TicketCategory::from_str(self.category.trim())?;
        let priority = match self.priority.as_deref() {
            Some(p) => TicketPriority::from_str(p)?,
            None => TicketPriority::default(),
        };

        let (user_id, user_email, user_name) = match &self.session {
            Some(session) => (
                session.id.clone(),
                session.email.clone(),
                session.display_name(),
            ),
            None => (
                "anonymous".to_string(),
                "anonymous@example.com".to_string(),
                "Anonymous".to_string(),
            ),
        };

        if !self.attachments.is_empty() {
            debug!(
                count = self.attachments.len(),
                "attachments received with submission; not persisted"
            );
        }

        let now = utils::iso_date();
        Ok(Ticket {
            id: utils::generate_ticket_id(),
            title: self.title,
            description: self.description,
            category,
            priority,
            status: TicketStatus::Open,
            user_id,
            user_email,
            user_name,
            assigned_to: self.assigned_to,
            created_at: now.clone(),
            updated_at: now,
            due_date: None,
            resolved_at: None,
        })
    }
}
