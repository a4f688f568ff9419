//! Seeded demo tickets for the dashboard.
//!
//! The store has no persistence, so a fresh dashboard is populated with
//! these five tickets. Created/updated ages are relative to now so the
//! data always looks recent.

use crate::types::{Ticket, TicketCategory, TicketPriority, TicketStatus};
use crate::utils::{iso_date_hours_ago, iso_date_minutes_ago};

/// The five demonstration tickets: 2 open, 1 in progress, 1 resolved,
/// 1 waiting.
pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "ticket_001".to_string(),
            title: "Login page not loading properly".to_string(),
            description: "Users are experiencing issues when trying to access the login page. \
                          The page appears to be stuck on loading screen."
                .to_string(),
            category: TicketCategory::BugReport,
            priority: TicketPriority::High,
            status: TicketStatus::Open,
            user_id: "user_001".to_string(),
            user_email: "john.doe@example.com".to_string(),
            user_name: "John Doe".to_string(),
            assigned_to: Some("Dev Team".to_string()),
            created_at: iso_date_hours_ago(2),
            updated_at: iso_date_hours_ago(1),
            ..Default::default()
        },
        Ticket {
            id: "ticket_002".to_string(),
            title: "Feature request: Dark mode support".to_string(),
            description: "It would be great to have a dark mode option for better user \
                          experience during night time usage."
                .to_string(),
            category: TicketCategory::FeatureRequest,
            priority: TicketPriority::Medium,
            status: TicketStatus::InProgress,
            user_id: "user_002".to_string(),
            user_email: "jane.smith@example.com".to_string(),
            user_name: "Jane Smith".to_string(),
            assigned_to: Some("UI Team".to_string()),
            created_at: iso_date_hours_ago(24),
            updated_at: iso_date_hours_ago(12),
            ..Default::default()
        },
        Ticket {
            id: "ticket_003".to_string(),
            title: "Critical: Database connection timeout".to_string(),
            description: "Production database is experiencing frequent connection timeouts \
                          causing service disruption."
                .to_string(),
            category: TicketCategory::TechnicalSupport,
            priority: TicketPriority::Critical,
            status: TicketStatus::Open,
            user_id: "user_003".to_string(),
            user_email: "admin@example.com".to_string(),
            user_name: "System Admin".to_string(),
            created_at: iso_date_minutes_ago(30),
            updated_at: iso_date_minutes_ago(15),
            ..Default::default()
        },
        Ticket {
            id: "ticket_004".to_string(),
            title: "Password reset email not received".to_string(),
            description: "User reported not receiving password reset emails. Checked spam \
                          folder as well."
                .to_string(),
            category: TicketCategory::AccountIssue,
            priority: TicketPriority::Medium,
            status: TicketStatus::Resolved,
            user_id: "user_004".to_string(),
            user_email: "support@example.com".to_string(),
            user_name: "Support Team".to_string(),
            assigned_to: Some("Backend Team".to_string()),
            created_at: iso_date_hours_ago(72),
            updated_at: iso_date_hours_ago(48),
            resolved_at: Some(iso_date_hours_ago(48)),
            ..Default::default()
        },
        Ticket {
            id: "ticket_005".to_string(),
            title: "Performance issue on mobile devices".to_string(),
            description: "The application is running slowly on mobile devices, especially on \
                          older Android phones."
                .to_string(),
            category: TicketCategory::PerformanceIssue,
            priority: TicketPriority::Low,
            status: TicketStatus::Waiting,
            user_id: "user_005".to_string(),
            user_email: "mobile.user@example.com".to_string(),
            user_name: "Mobile User".to_string(),
            created_at: iso_date_hours_ago(120),
            updated_at: iso_date_hours_ago(96),
            ..Default::default()
        },
    ]
}
