//! Timeout and retry policy at the API boundary.
//!
//! Commands never call a [`HelpdeskApi`] implementation directly; they go
//! through [`ApiClient`], which bounds every request with a deadline and
//! retries timed-out requests. Domain errors pass through untouched;
//! retrying a not-found would not make the record appear.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::bulk::{TicketAction, UserAction};
use crate::config::Config;
use crate::error::{DeskError, Result};
use crate::store::HelpdeskApi;
use crate::types::{Article, Ticket, TicketDraft, User};

#[derive(Clone)]
pub struct ApiClient {
    api: Arc<dyn HelpdeskApi>,
    timeout: Duration,
    retries: u32,
}

impl ApiClient {
    pub fn new(api: Arc<dyn HelpdeskApi>, config: &Config) -> Self {
        ApiClient {
            api,
            timeout: config.request_timeout(),
            retries: config.request_retries,
        }
    }

    /// Wrap a client directly around an API with explicit policy values.
    pub fn with_policy(api: Arc<dyn HelpdeskApi>, timeout: Duration, retries: u32) -> Self {
        ApiClient {
            api,
            timeout,
            retries,
        }
    }

    pub async fn fetch_tickets(&self) -> Result<Vec<Ticket>> {
        self.call("fetch_tickets", || self.api.fetch_tickets()).await
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>> {
        self.call("fetch_users", || self.api.fetch_users()).await
    }

    pub async fn fetch_articles(&self) -> Result<Vec<Article>> {
        self.call("fetch_articles", || self.api.fetch_articles()).await
    }

    pub async fn submit_ticket(&self, draft: &TicketDraft) -> Result<Ticket> {
        self.call("submit_ticket", || self.api.submit_ticket(draft.clone()))
            .await
    }

    pub async fn apply_ticket_action(&self, action: TicketAction, id: &str) -> Result<()> {
        self.call("apply_ticket_action", || {
            self.api.apply_ticket_action(action, id)
        })
        .await
    }

    pub async fn apply_user_action(&self, action: UserAction, id: &str) -> Result<()> {
        self.call("apply_user_action", || self.api.apply_user_action(action, id))
            .await
    }

    /// Run one request under the deadline, retrying only on timeout.
    async fn call<T, F, Fut>(&self, what: &'static str, request: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let attempts = self.retries.saturating_add(1);
        for attempt in 1..=attempts {
            match tokio::time::timeout(self.timeout, request()).await {
                Ok(outcome) => return outcome,
                Err(_) => {
                    tracing::warn!(what, attempt, "request timed out");
                }
            }
        }
        Err(DeskError::Timeout(attempts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DeskStore;
    use async_trait::async_trait;

    /// An API that never answers, for exercising the deadline path.
    struct StalledApi;

    #[async_trait]
    impl HelpdeskApi for StalledApi {
        async fn fetch_tickets(&self) -> Result<Vec<Ticket>> {
            futures::future::pending().await
        }
        async fn fetch_users(&self) -> Result<Vec<User>> {
            futures::future::pending().await
        }
        async fn fetch_articles(&self) -> Result<Vec<Article>> {
            futures::future::pending().await
        }
        async fn submit_ticket(&self, _draft: TicketDraft) -> Result<Ticket> {
            futures::future::pending().await
        }
        async fn apply_ticket_action(&self, _action: TicketAction, _id: &str) -> Result<()> {
            futures::future::pending().await
        }
        async fn apply_user_action(&self, _action: UserAction, _id: &str) -> Result<()> {
            futures::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_timeout_surfaces_after_retries() {
        let client = ApiClient::with_policy(Arc::new(StalledApi), Duration::from_millis(10), 2);
        let result = client.fetch_tickets().await;
        assert!(matches!(result, Err(DeskError::Timeout(3))));
    }

    #[tokio::test]
    async fn test_fast_backend_passes_through() {
        let client = ApiClient::with_policy(
            Arc::new(DeskStore::seeded()),
            Duration::from_secs(5),
            0,
        );
        let tickets = client.fetch_tickets().await.unwrap();
        assert!(!tickets.is_empty());
    }

    #[tokio::test]
    async fn test_domain_errors_are_not_retried() {
        let client = ApiClient::with_policy(
            Arc::new(DeskStore::seeded()),
            Duration::from_secs(5),
            2,
        );
        let result = client.apply_user_action(UserAction::Delete, "USR-999").await;
        assert!(matches!(result, Err(DeskError::UserNotFound(_))));
    }
}
