use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeskflowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Waiting,
    Resolved,
    Closed,
}

impl TicketStatus {
    /// Human-readable label for select widgets and badges.
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Waiting => "Waiting",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "open"),
            TicketStatus::InProgress => write!(f, "in_progress"),
            TicketStatus::Waiting => write!(f, "waiting"),
            TicketStatus::Resolved => write!(f, "resolved"),
            TicketStatus::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = DeskflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "in_progress" => Ok(TicketStatus::InProgress),
            "waiting" => Ok(TicketStatus::Waiting),
            "resolved" => Ok(TicketStatus::Resolved),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(DeskflowError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["open", "in_progress", "waiting", "resolved", "closed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Critical => "Critical",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketPriority::Low => write!(f, "low"),
            TicketPriority::Medium => write!(f, "medium"),
            TicketPriority::High => write!(f, "high"),
            TicketPriority::Critical => write!(f, "critical"),
        }
    }
}

impl FromStr for TicketPriority {
    type Err = DeskflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            "critical" => Ok(TicketPriority::Critical),
            _ => Err(DeskflowError::InvalidPriority(s.to_string())),
        }
    }
}

pub const VALID_PRIORITIES: &[&str] = &["low", "medium", "high", "critical"];

/// The fixed set of ticket categories offered by the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketCategory {
    #[serde(rename = "Bug Report")]
    BugReport,
    #[serde(rename = "Feature Request")]
    FeatureRequest,
    #[serde(rename = "Technical Support")]
    TechnicalSupport,
    #[serde(rename = "Account Issue")]
    AccountIssue,
    #[serde(rename = "Performance Issue")]
    PerformanceIssue,
    #[serde(rename = "Security Concern")]
    SecurityConcern,
    #[default]
    #[serde(rename = "Other")]
    Other,
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketCategory::BugReport => write!(f, "Bug Report"),
            TicketCategory::FeatureRequest => write!(f, "Feature Request"),
            TicketCategory::TechnicalSupport => write!(f, "Technical Support"),
            TicketCategory::AccountIssue => write!(f, "Account Issue"),
            TicketCategory::PerformanceIssue => write!(f, "Performance Issue"),
            TicketCategory::SecurityConcern => write!(f, "Security Concern"),
            TicketCategory::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for TicketCategory {
    type Err = DeskflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bug report" => Ok(TicketCategory::BugReport),
            "feature request" => Ok(TicketCategory::FeatureRequest),
            "technical support" => Ok(TicketCategory::TechnicalSupport),
            "account issue" => Ok(TicketCategory::AccountIssue),
            "performance issue" => Ok(TicketCategory::PerformanceIssue),
            "security concern" => Ok(TicketCategory::SecurityConcern),
            "other" => Ok(TicketCategory::Other),
            _ => Err(DeskflowError::InvalidCategory(s.to_string())),
        }
    }
}

pub const VALID_CATEGORIES: &[&str] = &[
    "Bug Report",
    "Feature Request",
    "Technical Support",
    "Account Issue",
    "Performance Issue",
    "Security Concern",
    "Other",
];

/// A single support ticket.
///
/// Timestamps are ISO 8601 strings; `created_at` is set once at submission
/// and `updated_at` is not refreshed afterwards (no mutation exists in
/// scope). Field names serialize in the camelCase wire shape the
/// presentation layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub user_id: String,
    pub user_email: String,
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<String>,
}

impl Ticket {
    /// Short reference shown to users ("#xxxxxx"): the last six characters
    /// of the id.
    pub fn short_ref(&self) -> &str {
        let start = self.id.len().saturating_sub(6);
        self.id.get(start..).unwrap_or(&self.id)
    }
}

impl Default for Ticket {
    fn default() -> Self {
        Ticket {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            category: TicketCategory::default(),
            priority: TicketPriority::default(),
            status: TicketStatus::default(),
            user_id: String::new(),
            user_email: String::new(),
            user_name: String::new(),
            assigned_to: None,
            created_at: String::new(),
            updated_at: String::new(),
            due_date: None,
            resolved_at: None,
        }
    }
}

/// Declared in the data model but not yet produced by any operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketComment {
    pub id: String,
    pub ticket_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub comment: String,
    pub is_internal: bool,
    pub created_at: String,
}

/// Declared in the data model but not yet produced by any operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketAttachment {
    pub id: String,
    pub ticket_id: String,
    pub filename: String,
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    pub uploaded_by: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in VALID_STATUSES {
            let status: TicketStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), *s);
        }
    }

    #[test]
    fn test_status_serde_wire_values() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::from_str::<TicketStatus>("\"waiting\"").unwrap(),
            TicketStatus::Waiting
        );
    }

    #[test]
    fn test_invalid_status_string_parse_fails() {
        assert!("new".parse::<TicketStatus>().is_err());
        assert!("done".parse::<TicketStatus>().is_err());
        assert!("in-progress".parse::<TicketStatus>().is_err()); // hyphen instead of underscore
        assert!("".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn test_priority_defaults_to_medium() {
        assert_eq!(TicketPriority::default(), TicketPriority::Medium);
    }

    #[test]
    fn test_priority_parse_case_insensitive() {
        assert_eq!(
            "Critical".parse::<TicketPriority>().unwrap(),
            TicketPriority::Critical
        );
        assert!("urgent".parse::<TicketPriority>().is_err());
    }

    #[test]
    fn test_category_labels() {
        for label in VALID_CATEGORIES {
            let category: TicketCategory = label.parse().unwrap();
            assert_eq!(category.to_string(), *label);
        }
        assert!("Billing".parse::<TicketCategory>().is_err());
    }

    #[test]
    fn test_category_serde_uses_display_label() {
        assert_eq!(
            serde_json::to_string(&TicketCategory::BugReport).unwrap(),
            "\"Bug Report\""
        );
        assert_eq!(
            serde_json::from_str::<TicketCategory>("\"Security Concern\"").unwrap(),
            TicketCategory::SecurityConcern
        );
    }

    #[test]
    fn test_short_ref() {
        let ticket = Ticket {
            id: "ticket_a1b2c3d4".to_string(),
            ..Default::default()
        };
        assert_eq!(ticket.short_ref(), "b2c3d4");
        let short = Ticket {
            id: "t_1".to_string(),
            ..Default::default()
        };
        assert_eq!(short.short_ref(), "t_1");
    }

    #[test]
    fn test_ticket_wire_shape() {
        let ticket = Ticket {
            id: "ticket_001".to_string(),
            title: "Login page not loading".to_string(),
            category: TicketCategory::BugReport,
            priority: TicketPriority::High,
            status: TicketStatus::Open,
            user_email: "john.doe@example.com".to_string(),
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["userEmail"], "john.doe@example.com");
        assert_eq!(json["category"], "Bug Report");
        assert_eq!(json["status"], "open");
        // Absent optionals are omitted, not null
        assert!(json.get("assignedTo").is_none());
        assert!(json.get("resolvedAt").is_none());
    }
}
