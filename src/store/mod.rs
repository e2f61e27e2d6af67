//! The mock helpdesk backend.
//!
//! [`HelpdeskApi`] is the request/response boundary the views talk to. The
//! in-process implementation, [`DeskStore`], keeps the seeded dataset in
//! `DashMap`s behind a process-wide singleton; a real deployment would put
//! an HTTP client behind the same trait. Queries sort by id so results are
//! deterministic, and seeded ids are zero-padded so id order is seed order.

pub mod client;
pub mod seed;

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use jiff::Timestamp;
use tokio::sync::OnceCell;

use crate::bulk::{TicketAction, UserAction};
use crate::error::{DeskError, Result};
use crate::types::{Article, Ticket, TicketDraft, TicketPriority, TicketStatus, User};
use crate::utils::generate_record_id;

pub use client::ApiClient;

/// The request/response boundary between the views and entity data.
#[async_trait]
pub trait HelpdeskApi: Send + Sync {
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>>;
    async fn fetch_users(&self) -> Result<Vec<User>>;
    async fn fetch_articles(&self) -> Result<Vec<Article>>;

    /// Submit a new ticket and return it with its assigned id.
    async fn submit_ticket(&self, draft: TicketDraft) -> Result<Ticket>;

    async fn apply_ticket_action(&self, action: TicketAction, id: &str) -> Result<()>;
    async fn apply_user_action(&self, action: UserAction, id: &str) -> Result<()>;
}

/// In-memory store holding the seeded demo dataset.
pub struct DeskStore {
    tickets: DashMap<String, Ticket>,
    users: DashMap<String, User>,
    articles: DashMap<String, Article>,
}

/// Global singleton for the mock backend.
static STORE: OnceCell<Arc<DeskStore>> = OnceCell::const_new();

/// Get or initialize the global store singleton, seeding the demo dataset
/// on first call. Subsequent calls return the existing store.
pub async fn get_or_init_store() -> Arc<DeskStore> {
    STORE
        .get_or_init(|| async {
            let store = DeskStore::seeded();
            tracing::debug!(
                tickets = store.tickets.len(),
                users = store.users.len(),
                articles = store.articles.len(),
                "seeded demo dataset"
            );
            Arc::new(store)
        })
        .await
        .clone()
}

impl DeskStore {
    /// Create an empty store.
    pub fn empty() -> Self {
        DeskStore {
            tickets: DashMap::new(),
            users: DashMap::new(),
            articles: DashMap::new(),
        }
    }

    /// Create a store populated with the demo dataset.
    pub fn seeded() -> Self {
        let store = Self::empty();
        for ticket in seed::tickets() {
            store.tickets.insert(ticket.id.clone(), ticket);
        }
        for user in seed::users() {
            store.users.insert(user.id.clone(), user);
        }
        for article in seed::articles() {
            store.articles.insert(article.id.clone(), article);
        }
        store
    }

    fn tickets_sorted(&self) -> Vec<Ticket> {
        let mut results: Vec<Ticket> = self.tickets.iter().map(|r| r.value().clone()).collect();
        results.sort_by(|a, b| a.id.cmp(&b.id));
        results
    }

    fn users_sorted(&self) -> Vec<User> {
        let mut results: Vec<User> = self.users.iter().map(|r| r.value().clone()).collect();
        results.sort_by(|a, b| a.id.cmp(&b.id));
        results
    }

    fn articles_sorted(&self) -> Vec<Article> {
        let mut results: Vec<Article> = self.articles.iter().map(|r| r.value().clone()).collect();
        results.sort_by(|a, b| a.id.cmp(&b.id));
        results
    }

    /// Look a user up by email, case-insensitively.
    pub fn user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .iter()
            .find(|r| unicase::eq(r.value().email.as_str(), email))
            .map(|r| r.value().clone())
    }

    pub fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id).map(|r| r.value().clone())
    }
}

#[async_trait]
impl HelpdeskApi for DeskStore {
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>> {
        Ok(self.tickets_sorted())
    }

    async fn fetch_users(&self) -> Result<Vec<User>> {
        Ok(self.users_sorted())
    }

    async fn fetch_articles(&self) -> Result<Vec<Article>> {
        Ok(self.articles_sorted())
    }

    async fn submit_ticket(&self, draft: TicketDraft) -> Result<Ticket> {
        let id = generate_record_id("HD", |candidate| self.tickets.contains_key(candidate));
        let now = Timestamp::now();
        let ticket = Ticket {
            id: id.clone(),
            subject: draft.subject,
            description: draft.description,
            status: TicketStatus::New,
            priority: draft.priority,
            category: draft.category,
            assignee: None,
            requester: draft.requester,
            created: now,
            updated: now,
            // Mock triage score; a real backend would run classification here
            ai_confidence: 82,
        };
        self.tickets.insert(id, ticket.clone());
        Ok(ticket)
    }

    async fn apply_ticket_action(&self, action: TicketAction, id: &str) -> Result<()> {
        if let TicketAction::Delete = action {
            return self
                .tickets
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| DeskError::TicketNotFound(id.to_string()));
        }

        let mut entry = self
            .tickets
            .get_mut(id)
            .ok_or_else(|| DeskError::TicketNotFound(id.to_string()))?;
        let ticket = entry.value_mut();
        match action {
            TicketAction::Close => ticket.status = TicketStatus::Closed,
            TicketAction::Resolve => ticket.status = TicketStatus::Resolved,
            TicketAction::Escalate => {
                ticket.priority = match ticket.priority {
                    TicketPriority::Low => TicketPriority::Medium,
                    TicketPriority::Medium => TicketPriority::High,
                    TicketPriority::High | TicketPriority::Critical => TicketPriority::Critical,
                };
            }
            TicketAction::Delete => unreachable!("handled above"),
        }
        ticket.updated = Timestamp::now();
        Ok(())
    }

    async fn apply_user_action(&self, action: UserAction, id: &str) -> Result<()> {
        if let UserAction::Delete = action {
            return self
                .users
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| DeskError::UserNotFound(id.to_string()));
        }

        let mut entry = self
            .users
            .get_mut(id)
            .ok_or_else(|| DeskError::UserNotFound(id.to_string()))?;
        let user = entry.value_mut();
        match action {
            UserAction::Activate => user.active = true,
            UserAction::Deactivate => user.active = false,
            UserAction::Delete => unreachable!("handled above"),
        }
        user.last_active = Timestamp::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Contact;

    #[tokio::test]
    async fn test_fetch_tickets_sorted_by_id() {
        let store = DeskStore::seeded();
        let tickets = store.fetch_tickets().await.unwrap();
        assert!(!tickets.is_empty());
        for pair in tickets.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[tokio::test]
    async fn test_submit_ticket_assigns_fresh_id() {
        let store = DeskStore::seeded();
        let before = store.fetch_tickets().await.unwrap().len();
        let ticket = store
            .submit_ticket(TicketDraft {
                subject: "Monitor flickering".to_string(),
                description: None,
                priority: TicketPriority::Low,
                category: crate::types::Category::It,
                requester: Contact::new("Alice Johnson", "alice@company.com"),
            })
            .await
            .unwrap();
        assert!(ticket.id.starts_with("HD-"));
        assert_eq!(ticket.status, TicketStatus::New);
        assert_eq!(store.fetch_tickets().await.unwrap().len(), before + 1);
    }

    #[tokio::test]
    async fn test_user_actions_toggle_and_delete() {
        let store = DeskStore::seeded();
        store
            .apply_user_action(UserAction::Deactivate, "USR-001")
            .await
            .unwrap();
        assert!(!store.get_user("USR-001").unwrap().active);

        store
            .apply_user_action(UserAction::Activate, "USR-001")
            .await
            .unwrap();
        assert!(store.get_user("USR-001").unwrap().active);

        store
            .apply_user_action(UserAction::Delete, "USR-003")
            .await
            .unwrap();
        assert!(store.get_user("USR-003").is_none());

        assert!(matches!(
            store.apply_user_action(UserAction::Delete, "USR-999").await,
            Err(DeskError::UserNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_escalate_saturates_at_critical() {
        let store = DeskStore::seeded();
        for _ in 0..5 {
            store
                .apply_ticket_action(TicketAction::Escalate, "HD-003")
                .await
                .unwrap();
        }
        let tickets = store.fetch_tickets().await.unwrap();
        let ticket = tickets.iter().find(|t| t.id == "HD-003").unwrap();
        assert_eq!(ticket.priority, TicketPriority::Critical);
    }

    #[tokio::test]
    async fn test_close_action_touches_updated() {
        let store = DeskStore::seeded();
        store
            .apply_ticket_action(TicketAction::Close, "HD-001")
            .await
            .unwrap();
        let tickets = store.fetch_tickets().await.unwrap();
        let ticket = tickets.iter().find(|t| t.id == "HD-001").unwrap();
        assert_eq!(ticket.status, TicketStatus::Closed);
        assert!(ticket.updated > ticket.created);
    }

    #[test]
    fn test_user_by_email_is_case_insensitive() {
        let store = DeskStore::seeded();
        let user = store.user_by_email("SARAH.WILSON@company.com").unwrap();
        assert_eq!(user.id, "USR-001");
        assert!(store.user_by_email("nobody@company.com").is_none());
    }
}
