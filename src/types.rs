use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    #[default]
    New,
    InProgress,
    Resolved,
    Closed,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::New => write!(f, "new"),
            TicketStatus::InProgress => write!(f, "in-progress"),
            TicketStatus::Resolved => write!(f, "resolved"),
            TicketStatus::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(TicketStatus::New),
            "in-progress" | "in_progress" => Ok(TicketStatus::InProgress),
            "resolved" => Ok(TicketStatus::Resolved),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(DeskError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["new", "in-progress", "resolved", "closed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    /// Urgency rank for sorting (0 = most urgent).
    pub fn rank(&self) -> u8 {
        match self {
            TicketPriority::Critical => 0,
            TicketPriority::High => 1,
            TicketPriority::Medium => 2,
            TicketPriority::Low => 3,
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
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            "critical" => Ok(TicketPriority::Critical),
            _ => Err(DeskError::InvalidPriority(s.to_string())),
        }
    }
}

pub const VALID_PRIORITIES: &[&str] = &["low", "medium", "high", "critical"];

/// Ticket routing category. Users carry the same set as their department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    It,
    Hr,
    Admin,
    #[default]
    General,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::It => write!(f, "it"),
            Category::Hr => write!(f, "hr"),
            Category::Admin => write!(f, "admin"),
            Category::General => write!(f, "general"),
        }
    }
}

impl FromStr for Category {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "it" => Ok(Category::It),
            "hr" => Ok(Category::Hr),
            "admin" => Ok(Category::Admin),
            "general" => Ok(Category::General),
            _ => Err(DeskError::InvalidCategory(s.to_string())),
        }
    }
}

pub const VALID_CATEGORIES: &[&str] = &["it", "hr", "admin", "general"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    It,
    Hr,
    Admin,
    #[default]
    General,
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Department::It => write!(f, "it"),
            Department::Hr => write!(f, "hr"),
            Department::Admin => write!(f, "admin"),
            Department::General => write!(f, "general"),
        }
    }
}

impl FromStr for Department {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "it" => Ok(Department::It),
            "hr" => Ok(Department::Hr),
            "admin" => Ok(Department::Admin),
            "general" => Ok(Department::General),
            _ => Err(DeskError::InvalidDepartment(s.to_string())),
        }
    }
}

pub const VALID_DEPARTMENTS: &[&str] = &["it", "hr", "admin", "general"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Agent,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Employee => write!(f, "employee"),
            Role::Agent => write!(f, "agent"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "employee" => Ok(Role::Employee),
            "agent" => Ok(Role::Agent),
            "admin" => Ok(Role::Admin),
            _ => Err(DeskError::InvalidRole(s.to_string())),
        }
    }
}

pub const VALID_ROLES: &[&str] = &["employee", "agent", "admin"];

pub const VALID_USER_STATES: &[&str] = &["active", "inactive"];

/// Name + email pair attached to a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: &str, email: &str) -> Self {
        Contact {
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub category: Category,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    pub requester: Contact,

    pub created: Timestamp,
    pub updated: Timestamp,

    /// Classification confidence reported by the triage model (0-100).
    pub ai_confidence: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: Department,
    pub role: Role,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub active: bool,
    pub last_active: Timestamp,
    pub created: Timestamp,
}

impl User {
    /// The state string the user-list filter matches against.
    pub fn state(&self) -> &'static str {
        if self.active { "active" } else { "inactive" }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: String,
    pub author: String,
    pub views: u32,
    pub updated: Timestamp,
}

/// Fields supplied by the caller when submitting a new ticket.
#[derive(Debug, Clone)]
pub struct TicketDraft {
    pub subject: String,
    pub description: Option<String>,
    pub priority: TicketPriority,
    pub category: Category,
    pub requester: Contact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in VALID_STATUSES {
            let status: TicketStatus = s.parse().unwrap();
            assert_eq!(&status.to_string(), s);
        }
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(
            "In-Progress".parse::<TicketStatus>().unwrap(),
            TicketStatus::InProgress
        );
        assert_eq!(
            "in_progress".parse::<TicketStatus>().unwrap(),
            TicketStatus::InProgress
        );
    }

    #[test]
    fn test_invalid_status_rejected() {
        assert!("open".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn test_priority_rank_ordering() {
        assert!(TicketPriority::Critical.rank() < TicketPriority::High.rank());
        assert!(TicketPriority::High.rank() < TicketPriority::Medium.rank());
        assert!(TicketPriority::Medium.rank() < TicketPriority::Low.rank());
    }

    #[test]
    fn test_role_default_is_employee() {
        assert_eq!(Role::default(), Role::Employee);
    }

    #[test]
    fn test_user_state_string() {
        let mut user = User {
            id: "USR-001".to_string(),
            name: "Sarah Wilson".to_string(),
            email: "sarah.wilson@company.com".to_string(),
            department: Department::It,
            role: Role::Admin,
            phone: None,
            active: true,
            last_active: Timestamp::UNIX_EPOCH,
            created: Timestamp::UNIX_EPOCH,
        };
        assert_eq!(user.state(), "active");
        user.active = false;
        assert_eq!(user.state(), "inactive");
    }
}
