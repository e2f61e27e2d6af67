mod auth;
mod config;
mod dashboard;
mod filters;
mod kb;
mod tickets;
mod users;

pub use auth::{cmd_login, cmd_logout, cmd_whoami};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use dashboard::cmd_dashboard;
pub use filters::{
    SaveFilterArgs, cmd_filters_default, cmd_filters_ls, cmd_filters_rm, cmd_filters_save,
};
pub use kb::{cmd_kb_ls, cmd_kb_show};
pub use tickets::{
    TicketFilterArgs, cmd_tickets_bulk, cmd_tickets_create, cmd_tickets_ls, cmd_tickets_show,
};
pub use users::{UserFilterArgs, cmd_users_bulk, cmd_users_ls};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Config;
use crate::error::{DeskError, Result};
use crate::filter::Filterable;
use crate::notify::{ConsoleNotifier, Notifier, NullNotifier};
use crate::store::{ApiClient, get_or_init_store};
use crate::types::{Ticket, TicketPriority, TicketStatus};
use crate::utils::{format_relative, truncate_string};

/// Load config and wrap the mock backend in a client with its policy.
pub async fn api_context() -> Result<(Config, ApiClient)> {
    let config = Config::load()?;
    let store = get_or_init_store().await;
    let client = ApiClient::new(store, &config);
    Ok((config, client))
}

/// Pretty-print a serializable value as JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Pick the notification sink for a command invocation. JSON output keeps
/// stdout machine-readable, so toasts are dropped there.
pub fn make_notifier(config: &Config, json: bool) -> Box<dyn Notifier> {
    if json || !config.notifications.enabled {
        Box::new(NullNotifier)
    } else {
        Box::new(ConsoleNotifier)
    }
}

/// Resolve a possibly-partial record id against a fetched list: exact match
/// first, then unique case-insensitive substring match.
pub fn resolve_record<'a, T: Filterable>(
    records: &'a [T],
    partial: &str,
    not_found: fn(String) -> DeskError,
) -> Result<&'a T> {
    if let Some(exact) = records.iter().find(|r| r.record_id() == partial) {
        return Ok(exact);
    }
    let matches: Vec<&T> = records
        .iter()
        .filter(|r| crate::filter::contains_case_insensitive(r.record_id(), partial))
        .collect();
    match matches.len() {
        0 => Err(not_found(partial.to_string())),
        1 => Ok(matches[0]),
        _ => Err(DeskError::AmbiguousId(partial.to_string())),
    }
}

/// A row in a ticket list table
#[derive(Tabled)]
pub struct TicketRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Requester")]
    requester: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

/// Render tickets as a table for list views.
pub fn ticket_table<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Table {
    let rows: Vec<TicketRow> = tickets
        .into_iter()
        .map(|t| TicketRow {
            id: t.id.clone(),
            subject: truncate_string(&t.subject, 42),
            status: t.status.to_string(),
            priority: t.priority.to_string(),
            category: t.category.to_string(),
            assignee: t.assignee.clone().unwrap_or_else(|| "-".to_string()),
            requester: t.requester.name.clone(),
            updated: format_relative(t.updated),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}

/// Colorize a ticket status for terminal output.
pub fn colored_status(status: TicketStatus) -> String {
    let text = status.to_string();
    match status {
        TicketStatus::New => text.yellow().to_string(),
        TicketStatus::InProgress => text.blue().to_string(),
        TicketStatus::Resolved => text.green().to_string(),
        TicketStatus::Closed => text.dimmed().to_string(),
    }
}

/// Colorize a ticket priority for terminal output.
pub fn colored_priority(priority: TicketPriority) -> String {
    let text = priority.to_string();
    match priority {
        TicketPriority::Critical => text.red().to_string(),
        TicketPriority::High => text.yellow().to_string(),
        TicketPriority::Medium | TicketPriority::Low => text,
    }
}
