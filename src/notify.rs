//! Outcome notifications.
//!
//! The dispatcher reports through this seam instead of printing directly,
//! so command code and tests can observe outcomes without capturing stdout.

use owo_colors::OwoColorize;
use parking_lot::Mutex;

/// A single fire-and-forget notification. No acknowledgement contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, description: &str);
}

/// Prints notifications to stdout in toast style.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, description: &str) {
        println!("{} {}", title.bold(), description);
    }
}

/// Collects notifications in memory. Used by tests and by `--json` output
/// paths where toasts would corrupt the JSON stream.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, title: &str, description: &str) {
        self.sent.lock().push(Notification {
            title: title.to_string(),
            description: description.to_string(),
        });
    }
}

/// Drops notifications. Used when notifications are disabled in config.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _description: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify("Bulk action", "Delete applied to 2 users");
        notifier.notify("Bulk action", "Activate applied to 1 user");

        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].description, "Delete applied to 2 users");
        assert_eq!(sent[1].title, "Bulk action");
    }
}
