//! Role-based dashboard composition.
//!
//! One fixed layout per role, selected by a total mapping with Employee as
//! the fallback for an absent or unrecognized role. Layout builders are
//! pure: they fold already-fetched store snapshots into a [`Dashboard`]
//! value and leave rendering to the command layer.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::types::{Article, Role, Ticket, TicketPriority, TicketStatus, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardKind {
    Employee,
    Agent,
    Admin,
}

impl DashboardKind {
    /// Select the layout for a role. Employee is the default layout for an
    /// absent or unknown role.
    pub fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Agent) => DashboardKind::Agent,
            Some(Role::Admin) => DashboardKind::Admin,
            Some(Role::Employee) | None => DashboardKind::Employee,
        }
    }
}

impl fmt::Display for DashboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardKind::Employee => write!(f, "employee"),
            DashboardKind::Agent => write!(f, "agent"),
            DashboardKind::Admin => write!(f, "admin"),
        }
    }
}

/// One headline number on a dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

impl StatCard {
    fn new(label: &str, value: impl fmt::Display) -> Self {
        StatCard {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub kind: DashboardKind,
    pub heading: String,
    pub stats: Vec<StatCard>,
    pub tickets_heading: String,
    pub tickets: Vec<Ticket>,
    /// Knowledge-base section; only the employee layout fills this.
    pub articles: Vec<Article>,
}

fn is_open(status: TicketStatus) -> bool {
    matches!(status, TicketStatus::New | TicketStatus::InProgress)
}

/// Sort tickets most-urgent first, ties broken by id.
fn sort_by_priority(tickets: &mut [Ticket]) {
    tickets.sort_by(|a, b| {
        let ra = a.priority.rank();
        let rb = b.priority.rank();
        if ra != rb { ra.cmp(&rb) } else { a.id.cmp(&b.id) }
    });
}

/// Build the dashboard for a layout from store snapshots.
///
/// `viewer` scopes the Employee layout ("my tickets") and the Agent layout
/// ("assigned to me"); without a viewer both fall back to unscoped lists.
pub fn build(
    kind: DashboardKind,
    viewer: Option<&User>,
    tickets: &[Ticket],
    users: &[User],
    articles: &[Article],
) -> Dashboard {
    match kind {
        DashboardKind::Employee => build_employee(viewer, tickets, articles),
        DashboardKind::Agent => build_agent(viewer, tickets),
        DashboardKind::Admin => build_admin(tickets, users),
    }
}

fn build_employee(viewer: Option<&User>, tickets: &[Ticket], articles: &[Article]) -> Dashboard {
    let mine: Vec<Ticket> = tickets
        .iter()
        .filter(|t| match viewer {
            Some(user) => t.requester.email == user.email,
            None => true,
        })
        .cloned()
        .collect();

    let open = mine.iter().filter(|t| is_open(t.status)).count();
    let resolved = mine
        .iter()
        .filter(|t| t.status == TicketStatus::Resolved)
        .count();

    let mut popular: Vec<Article> = articles.to_vec();
    popular.sort_by(|a, b| b.views.cmp(&a.views).then(a.id.cmp(&b.id)));
    popular.truncate(4);

    Dashboard {
        kind: DashboardKind::Employee,
        heading: "Employee Dashboard".to_string(),
        stats: vec![
            StatCard::new("my tickets", mine.len()),
            StatCard::new("open", open),
            StatCard::new("resolved", resolved),
        ],
        tickets_heading: "My Recent Tickets".to_string(),
        tickets: mine,
        articles: popular,
    }
}

fn build_agent(viewer: Option<&User>, tickets: &[Ticket]) -> Dashboard {
    let new = tickets.iter().filter(|t| t.status == TicketStatus::New).count();
    let in_progress = tickets
        .iter()
        .filter(|t| t.status == TicketStatus::InProgress)
        .count();
    let critical = tickets
        .iter()
        .filter(|t| is_open(t.status) && t.priority == TicketPriority::Critical)
        .count();

    let mut queue: Vec<Ticket> = tickets
        .iter()
        .filter(|t| is_open(t.status))
        .filter(|t| match viewer {
            Some(user) => t.assignee.as_deref() == Some(user.name.as_str()) || t.assignee.is_none(),
            None => true,
        })
        .cloned()
        .collect();
    sort_by_priority(&mut queue);

    Dashboard {
        kind: DashboardKind::Agent,
        heading: "Agent Dashboard".to_string(),
        stats: vec![
            StatCard::new("new", new),
            StatCard::new("in progress", in_progress),
            StatCard::new("critical open", critical),
        ],
        tickets_heading: "Ticket Queue".to_string(),
        tickets: queue,
        articles: Vec::new(),
    }
}

fn build_admin(tickets: &[Ticket], users: &[User]) -> Dashboard {
    let open = tickets.iter().filter(|t| is_open(t.status)).count();
    let active_users = users.iter().filter(|u| u.active).count();
    let agents = users.iter().filter(|u| u.role == Role::Agent).count();

    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    for t in tickets {
        *by_category.entry(t.category.to_string()).or_default() += 1;
    }

    let mut stats = vec![
        StatCard::new("tickets", tickets.len()),
        StatCard::new("open", open),
        StatCard::new("users", users.len()),
        StatCard::new("active users", active_users),
        StatCard::new("agents", agents),
    ];
    for (category, count) in &by_category {
        stats.push(StatCard::new(&format!("{category} tickets"), count));
    }

    let mut escalations: Vec<Ticket> = tickets
        .iter()
        .filter(|t| {
            is_open(t.status)
                && matches!(t.priority, TicketPriority::Critical | TicketPriority::High)
        })
        .cloned()
        .collect();
    sort_by_priority(&mut escalations);

    Dashboard {
        kind: DashboardKind::Admin,
        heading: "Admin Dashboard".to_string(),
        stats,
        tickets_heading: "Open Escalations".to_string(),
        tickets: escalations,
        articles: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_role_routing() {
        assert_eq!(
            DashboardKind::for_role(Some(Role::Agent)),
            DashboardKind::Agent
        );
        assert_eq!(
            DashboardKind::for_role(Some(Role::Admin)),
            DashboardKind::Admin
        );
        assert_eq!(
            DashboardKind::for_role(Some(Role::Employee)),
            DashboardKind::Employee
        );
        // Absent role falls back to the employee layout
        assert_eq!(DashboardKind::for_role(None), DashboardKind::Employee);
    }

    #[test]
    fn test_employee_layout_scopes_to_viewer() {
        let tickets = seed::tickets();
        let users = seed::users();
        let articles = seed::articles();
        let carol = users.iter().find(|u| u.name == "Carol White").unwrap();

        let dash = build(
            DashboardKind::Employee,
            Some(carol),
            &tickets,
            &users,
            &articles,
        );
        assert!(dash.tickets.iter().all(|t| t.requester.email == carol.email));
        assert_eq!(dash.stats[0].value, dash.tickets.len().to_string());
        assert_eq!(dash.articles.len(), 4);
        // Most-viewed article first
        assert_eq!(dash.articles[0].id, "KB-001");
    }

    #[test]
    fn test_agent_queue_is_open_and_urgent_first() {
        let tickets = seed::tickets();
        let dash = build(DashboardKind::Agent, None, &tickets, &[], &[]);
        assert!(dash.tickets.iter().all(|t| is_open(t.status)));
        for pair in dash.tickets.windows(2) {
            assert!(pair[0].priority.rank() <= pair[1].priority.rank());
        }
    }

    #[test]
    fn test_admin_breakdown_sums_to_total() {
        let tickets = seed::tickets();
        let users = seed::users();
        let dash = build(DashboardKind::Admin, None, &tickets, &users, &[]);

        let breakdown: usize = dash
            .stats
            .iter()
            .filter(|s| s.label.ends_with(" tickets"))
            .map(|s| s.value.parse::<usize>().unwrap())
            .sum();
        assert_eq!(breakdown, tickets.len());
        assert!(dash.tickets.iter().all(|t| is_open(t.status)));
    }
}
