//! Bulk action dispatch.
//!
//! A bulk action applies one named operation to every id in a
//! [`SelectionSet`], one request per id. Outcomes are tracked per id:
//! failures are reported individually and only the ids that succeeded are
//! removed from the selection, so a retry after a partial failure targets
//! exactly the remainder.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{DeskError, Result};
use crate::notify::Notifier;
use crate::selection::SelectionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketAction {
    Close,
    Resolve,
    Escalate,
    Delete,
}

impl fmt::Display for TicketAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketAction::Close => write!(f, "close"),
            TicketAction::Resolve => write!(f, "resolve"),
            TicketAction::Escalate => write!(f, "escalate"),
            TicketAction::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for TicketAction {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "close" => Ok(TicketAction::Close),
            "resolve" => Ok(TicketAction::Resolve),
            "escalate" => Ok(TicketAction::Escalate),
            "delete" => Ok(TicketAction::Delete),
            _ => Err(DeskError::InvalidAction(s.to_string())),
        }
    }
}

pub const VALID_TICKET_ACTIONS: &[&str] = &["close", "resolve", "escalate", "delete"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserAction {
    Activate,
    Deactivate,
    Delete,
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::Activate => write!(f, "activate"),
            UserAction::Deactivate => write!(f, "deactivate"),
            UserAction::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for UserAction {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "activate" => Ok(UserAction::Activate),
            "deactivate" => Ok(UserAction::Deactivate),
            "delete" => Ok(UserAction::Delete),
            _ => Err(DeskError::InvalidAction(s.to_string())),
        }
    }
}

pub const VALID_USER_ACTIONS: &[&str] = &["activate", "deactivate", "delete"];

/// One id that could not be processed.
#[derive(Debug, Clone, Serialize)]
pub struct BulkFailure {
    pub id: String,
    pub reason: String,
}

/// The outcome of one bulk dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct BulkReport {
    pub action: String,
    pub succeeded: Vec<String>,
    pub failed: Vec<BulkFailure>,
}

impl BulkReport {
    /// Toast line in the shape the list views show:
    /// "close applied to 2 tickets" or "... (1 failed)".
    pub fn description(&self, noun: &str) -> String {
        let n = self.succeeded.len();
        let noun = if n == 1 {
            noun.trim_end_matches('s')
        } else {
            noun
        };
        if self.failed.is_empty() {
            format!("{} applied to {} {}", self.action, n, noun)
        } else {
            format!(
                "{} applied to {} {} ({} failed)",
                self.action,
                n,
                noun,
                self.failed.len()
            )
        }
    }
}

/// Apply `op` to every selected id and report the outcome.
///
/// Refuses an empty selection. Succeeded ids are removed from the
/// selection; failed ids stay selected. A notification describing the
/// outcome is always emitted, even when every id failed.
pub async fn dispatch<F, Fut>(
    action: &str,
    noun: &str,
    selection: &mut SelectionSet,
    notifier: &dyn Notifier,
    op: F,
) -> Result<BulkReport>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    if selection.is_empty() {
        return Err(DeskError::EmptySelection);
    }

    let ids = selection.ids();
    let outcomes = futures::future::join_all(ids.into_iter().map(|id| {
        let fut = op(id.clone());
        async move { (id, fut.await) }
    }))
    .await;

    let mut report = BulkReport {
        action: action.to_string(),
        succeeded: Vec::new(),
        failed: Vec::new(),
    };
    for (id, outcome) in outcomes {
        match outcome {
            Ok(()) => {
                selection.remove(&id);
                report.succeeded.push(id);
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "bulk action failed for record");
                report.failed.push(BulkFailure {
                    id,
                    reason: e.to_string(),
                });
            }
        }
    }

    notifier.notify("Bulk action", &report.description(noun));
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MemoryNotifier;

    async fn ok_op(_id: String) -> Result<()> {
        Ok(())
    }

    #[tokio::test]
    async fn test_dispatch_clears_selection() {
        let mut selection: SelectionSet = ["USR-002", "USR-004"].into_iter().collect();
        let notifier = MemoryNotifier::new();

        let report = dispatch("delete", "users", &mut selection, &notifier, ok_op)
            .await
            .unwrap();

        assert!(selection.is_empty());
        assert_eq!(report.succeeded, vec!["USR-002", "USR-004"]);
        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].description, "delete applied to 2 users");
    }

    #[tokio::test]
    async fn test_dispatch_refuses_empty_selection() {
        let mut selection = SelectionSet::new();
        let notifier = MemoryNotifier::new();

        let result = dispatch("delete", "users", &mut selection, &notifier, ok_op).await;
        assert!(matches!(result, Err(DeskError::EmptySelection)));
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_keeps_failed_ids_selected() {
        let mut selection: SelectionSet = ["HD-001", "HD-404", "HD-002"].into_iter().collect();
        let notifier = MemoryNotifier::new();

        let report = dispatch("close", "tickets", &mut selection, &notifier, |id| async move {
            if id == "HD-404" {
                Err(DeskError::TicketNotFound(id))
            } else {
                Ok(())
            }
        })
        .await
        .unwrap();

        assert_eq!(report.succeeded, vec!["HD-001", "HD-002"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].id, "HD-404");
        // Only the failed id survives for a retry
        assert_eq!(selection.ids(), vec!["HD-404"]);
        assert_eq!(
            notifier.sent()[0].description,
            "close applied to 2 tickets (1 failed)"
        );
    }

    #[tokio::test]
    async fn test_dispatch_singular_noun() {
        let mut selection: SelectionSet = ["USR-001"].into_iter().collect();
        let notifier = MemoryNotifier::new();

        dispatch("activate", "users", &mut selection, &notifier, ok_op)
            .await
            .unwrap();
        assert_eq!(notifier.sent()[0].description, "activate applied to 1 user");
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!("Close".parse::<TicketAction>().unwrap(), TicketAction::Close);
        assert_eq!(
            "DEACTIVATE".parse::<UserAction>().unwrap(),
            UserAction::Deactivate
        );
        assert!("activate".parse::<TicketAction>().is_err());
        assert!("promote".parse::<UserAction>().is_err());
    }
}
