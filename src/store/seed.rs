//! Seeded demo dataset.
//!
//! Stands in for the production ticket/user/knowledge-base services. Ids are
//! zero-padded so that id order matches seed order.

use jiff::Timestamp;

use crate::types::{
    Article, Category, Contact, Department, Role, Ticket, TicketPriority, TicketStatus, User,
};

fn ts(s: &str) -> Timestamp {
    s.parse().expect("seed timestamp is valid RFC 3339")
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    id: &str,
    subject: &str,
    status: TicketStatus,
    priority: TicketPriority,
    category: Category,
    assignee: Option<&str>,
    requester: Contact,
    created: &str,
    updated: &str,
    ai_confidence: u8,
) -> Ticket {
    Ticket {
        id: id.to_string(),
        subject: subject.to_string(),
        description: None,
        status,
        priority,
        category,
        assignee: assignee.map(str::to_string),
        requester,
        created: ts(created),
        updated: ts(updated),
        ai_confidence,
    }
}

pub fn tickets() -> Vec<Ticket> {
    use Category::*;
    use TicketPriority::*;
    use TicketStatus::*;

    vec![
        ticket(
            "HD-001",
            "Cannot access email account after password reset",
            New,
            High,
            It,
            Some("John Smith"),
            Contact::new("Alice Johnson", "alice@company.com"),
            "2024-01-15T10:00:00Z",
            "2024-01-15T10:00:00Z",
            95,
        ),
        ticket(
            "HD-002",
            "Request for annual leave approval",
            InProgress,
            Medium,
            Hr,
            Some("Sarah Wilson"),
            Contact::new("Bob Chen", "bob@company.com"),
            "2024-01-14T14:30:00Z",
            "2024-01-15T09:15:00Z",
            88,
        ),
        ticket(
            "HD-003",
            "Office key replacement needed",
            Resolved,
            Low,
            Admin,
            Some("Mike Davis"),
            Contact::new("Carol White", "carol@company.com"),
            "2024-01-13T16:45:00Z",
            "2024-01-14T11:20:00Z",
            92,
        ),
        ticket(
            "HD-004",
            "VPN connection drops every few minutes",
            InProgress,
            High,
            It,
            Some("Michael Brown"),
            Contact::new("David Kim", "david.kim@company.com"),
            "2024-01-13T09:05:00Z",
            "2024-01-15T08:40:00Z",
            90,
        ),
        ticket(
            "HD-005",
            "Printer connection problem on 3rd floor",
            New,
            Low,
            It,
            None,
            Contact::new("Emily Johnson", "emily.johnson@company.com"),
            "2024-01-15T08:00:00Z",
            "2024-01-15T08:00:00Z",
            77,
        ),
        ticket(
            "HD-006",
            "Server downtime affecting production",
            InProgress,
            Critical,
            It,
            Some("Michael Brown"),
            Contact::new("Sarah Wilson", "sarah.wilson@company.com"),
            "2024-01-15T11:30:00Z",
            "2024-01-15T11:55:00Z",
            97,
        ),
        ticket(
            "HD-007",
            "Update emergency contact details",
            Closed,
            Low,
            Hr,
            Some("John Smith"),
            Contact::new("Carol White", "carol@company.com"),
            "2024-01-10T13:20:00Z",
            "2024-01-12T10:05:00Z",
            84,
        ),
        ticket(
            "HD-008",
            "Meeting room booking system shows wrong availability",
            New,
            Medium,
            General,
            None,
            Contact::new("Bob Chen", "bob@company.com"),
            "2024-01-15T07:45:00Z",
            "2024-01-15T07:45:00Z",
            71,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    email: &str,
    department: Department,
    role: Role,
    phone: Option<&str>,
    active: bool,
    last_active: &str,
    created: &str,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        department,
        role,
        phone: phone.map(str::to_string),
        active,
        last_active: ts(last_active),
        created: ts(created),
    }
}

pub fn users() -> Vec<User> {
    use Department::*;
    use Role::*;

    vec![
        user(
            "USR-001",
            "Sarah Wilson",
            "sarah.wilson@company.com",
            It,
            Role::Admin,
            Some("+1 (555) 123-4567"),
            true,
            "2024-01-15T11:58:00Z",
            "2023-01-15T00:00:00Z",
        ),
        user(
            "USR-002",
            "John Smith",
            "john.smith@company.com",
            Hr,
            Agent,
            Some("+1 (555) 234-5678"),
            true,
            "2024-01-15T11:00:00Z",
            "2023-02-20T00:00:00Z",
        ),
        user(
            "USR-003",
            "Emily Johnson",
            "emily.johnson@company.com",
            Department::Admin,
            Employee,
            Some("+1 (555) 345-6789"),
            false,
            "2024-01-14T12:00:00Z",
            "2023-03-10T00:00:00Z",
        ),
        user(
            "USR-004",
            "Michael Brown",
            "michael.brown@company.com",
            It,
            Agent,
            Some("+1 (555) 456-7890"),
            true,
            "2024-01-15T10:00:00Z",
            "2023-04-05T00:00:00Z",
        ),
        user(
            "USR-005",
            "Alice Johnson",
            "alice@company.com",
            General,
            Employee,
            None,
            true,
            "2024-01-15T10:05:00Z",
            "2023-05-22T00:00:00Z",
        ),
        user(
            "USR-006",
            "Bob Chen",
            "bob@company.com",
            Hr,
            Employee,
            None,
            true,
            "2024-01-15T07:50:00Z",
            "2023-06-30T00:00:00Z",
        ),
        user(
            "USR-007",
            "Carol White",
            "carol@company.com",
            Department::Admin,
            Employee,
            Some("+1 (555) 567-8901"),
            true,
            "2024-01-12T10:10:00Z",
            "2023-08-14T00:00:00Z",
        ),
        user(
            "USR-008",
            "David Kim",
            "david.kim@company.com",
            It,
            Employee,
            None,
            false,
            "2024-01-13T09:10:00Z",
            "2023-09-01T00:00:00Z",
        ),
    ]
}

fn article(id: &str, title: &str, category: &str, author: &str, views: u32, updated: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        author: author.to_string(),
        views,
        updated: ts(updated),
    }
}

pub fn articles() -> Vec<Article> {
    vec![
        article(
            "KB-001",
            "How to Reset Your Password",
            "IT Support",
            "IT Team",
            1240,
            "2024-01-08T09:00:00Z",
        ),
        article(
            "KB-002",
            "Remote Work Policy Guidelines",
            "HR Policies",
            "HR Team",
            890,
            "2024-01-05T15:30:00Z",
        ),
        article(
            "KB-003",
            "Expense Reporting Process",
            "Admin Procedures",
            "Admin Team",
            756,
            "2023-12-18T10:00:00Z",
        ),
        article(
            "KB-004",
            "VPN Connection Setup",
            "IT Support",
            "IT Team",
            645,
            "2024-01-11T14:00:00Z",
        ),
        article(
            "KB-005",
            "New Email Security Guidelines",
            "IT Support",
            "IT Team",
            312,
            "2024-01-15T10:00:00Z",
        ),
        article(
            "KB-006",
            "Updated Travel Policy",
            "HR Policies",
            "HR Team",
            204,
            "2024-01-14T12:00:00Z",
        ),
    ]
}
