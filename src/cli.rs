use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::str::FromStr;

use crate::bulk::{TicketAction, UserAction, VALID_TICKET_ACTIONS, VALID_USER_ACTIONS};
use crate::types::{
    Category, Role, TicketPriority, TicketStatus, VALID_CATEGORIES, VALID_DEPARTMENTS,
    VALID_PRIORITIES, VALID_ROLES, VALID_STATUSES, VALID_USER_STATES,
};

#[derive(Parser)]
#[command(name = "deskhub")]
#[command(about = "Helpdesk ticketing from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse and act on tickets
    #[command(visible_alias = "t")]
    Tickets {
        #[command(subcommand)]
        action: TicketCmd,
    },

    /// Browse and manage directory users
    #[command(visible_alias = "u")]
    Users {
        #[command(subcommand)]
        action: UserCmd,
    },

    /// Browse the knowledge base
    Kb {
        #[command(subcommand)]
        action: KbCmd,
    },

    /// Manage saved filters
    Filters {
        #[command(subcommand)]
        action: FilterCmd,
    },

    /// Show the dashboard for the viewer's role
    #[command(visible_alias = "d")]
    Dashboard {
        /// Render a specific layout: employee, agent, admin
        #[arg(long, value_parser = parse_role)]
        role: Option<Role>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log in as a directory user (mock auth, no password)
    Login {
        /// Email address in the user directory
        email: String,
    },

    /// Clear the current session
    Logout,

    /// Show the logged-in user
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigCmd,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum TicketCmd {
    /// List tickets under the active filters
    Ls {
        /// Free-text search over id, subject, requester, and assignee
        #[arg(short, long)]
        search: Option<String>,

        /// Status: new, in-progress, resolved, closed, all (case-insensitive)
        #[arg(long, value_parser = parse_status_filter)]
        status: Option<String>,

        /// Priority: low, medium, high, critical, all
        #[arg(long, value_parser = parse_priority_filter)]
        priority: Option<String>,

        /// Category: it, hr, admin, general, all
        #[arg(long, value_parser = parse_category_filter)]
        category: Option<String>,

        /// Start from a saved filter (name or id); explicit flags overlay it
        #[arg(long)]
        saved: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display ticket details
    #[command(visible_alias = "s")]
    Show {
        /// Ticket ID (can be partial)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new ticket as the logged-in user
    #[command(visible_alias = "c")]
    Create {
        /// Ticket subject
        subject: String,

        /// Description text
        #[arg(short, long)]
        description: Option<String>,

        /// Priority (default: medium)
        #[arg(short, long, default_value = "medium", value_parser = parse_priority)]
        priority: TicketPriority,

        /// Category (default: general)
        #[arg(short, long, default_value = "general", value_parser = parse_category)]
        category: Category,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply an action to many tickets at once
    Bulk {
        /// Action: close, resolve, escalate, delete
        #[arg(value_parser = parse_ticket_action)]
        action: TicketAction,

        /// Comma-separated ticket ids to select
        #[arg(long, value_delimiter = ',', group = "scope")]
        ids: Option<Vec<String>>,

        /// Select every ticket visible under the filter flags
        #[arg(long, group = "scope")]
        all: bool,

        /// Free-text search (with --all)
        #[arg(short, long)]
        search: Option<String>,

        /// Status filter (with --all)
        #[arg(long, value_parser = parse_status_filter)]
        status: Option<String>,

        /// Priority filter (with --all)
        #[arg(long, value_parser = parse_priority_filter)]
        priority: Option<String>,

        /// Category filter (with --all)
        #[arg(long, value_parser = parse_category_filter)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum UserCmd {
    /// List directory users under the active filters
    Ls {
        /// Free-text search over name and email
        #[arg(short, long)]
        search: Option<String>,

        /// Department: it, hr, admin, general, all
        #[arg(long, value_parser = parse_department_filter)]
        department: Option<String>,

        /// Role: employee, agent, admin, all
        #[arg(long, value_parser = parse_role_filter)]
        role: Option<String>,

        /// Status: active, inactive, all
        #[arg(long, value_parser = parse_user_state_filter)]
        status: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply an action to many users at once
    Bulk {
        /// Action: activate, deactivate, delete
        #[arg(value_parser = parse_user_action)]
        action: UserAction,

        /// Comma-separated user ids to select
        #[arg(long, value_delimiter = ',', group = "scope")]
        ids: Option<Vec<String>>,

        /// Select every user visible under the filter flags
        #[arg(long, group = "scope")]
        all: bool,

        /// Free-text search (with --all)
        #[arg(short, long)]
        search: Option<String>,

        /// Department filter (with --all)
        #[arg(long, value_parser = parse_department_filter)]
        department: Option<String>,

        /// Role filter (with --all)
        #[arg(long, value_parser = parse_role_filter)]
        role: Option<String>,

        /// Status filter (with --all)
        #[arg(long, value_parser = parse_user_state_filter)]
        status: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum KbCmd {
    /// List knowledge base articles, most viewed first
    Ls {
        /// Free-text search over title and author
        #[arg(short, long)]
        search: Option<String>,

        /// Category label, e.g. "IT Support" (exact match)
        #[arg(long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display one article
    Show {
        /// Article ID (can be partial)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum FilterCmd {
    /// Save the given filter flags under a name
    Save {
        /// Name for the saved filter
        name: String,

        /// Free-text search to snapshot
        #[arg(short, long)]
        search: Option<String>,

        /// Status selection to snapshot
        #[arg(long, value_parser = parse_status_filter)]
        status: Option<String>,

        /// Priority selection to snapshot
        #[arg(long, value_parser = parse_priority_filter)]
        priority: Option<String>,

        /// Category selection to snapshot
        #[arg(long, value_parser = parse_category_filter)]
        category: Option<String>,

        /// Department selection to snapshot
        #[arg(long, value_parser = parse_department_filter)]
        department: Option<String>,

        /// Role selection to snapshot
        #[arg(long, value_parser = parse_role_filter)]
        role: Option<String>,
    },

    /// List saved filters
    Ls {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a saved filter by id or unambiguous name
    Rm {
        /// Saved filter id or name
        filter: String,
    },

    /// Toggle the default flag on a saved filter
    Default {
        /// Saved filter id or name
        filter: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Print the full configuration
    Show,

    /// Print one configuration value
    Get {
        /// Config key (request_timeout, request_retries, notifications.enabled)
        key: String,
    },

    /// Update one configuration value
    Set {
        /// Config key
        key: String,

        /// New value
        value: String,
    },
}

/// Write completion scripts for the given shell to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "deskhub", &mut io::stdout());
}

fn parse_status(s: &str) -> Result<TicketStatus, String> {
    TicketStatus::from_str(s)
        .map_err(|_| format!("invalid status '{s}' (valid: {})", VALID_STATUSES.join(", ")))
}

fn parse_priority(s: &str) -> Result<TicketPriority, String> {
    TicketPriority::from_str(s).map_err(|_| {
        format!(
            "invalid priority '{s}' (valid: {})",
            VALID_PRIORITIES.join(", ")
        )
    })
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::from_str(s).map_err(|_| {
        format!(
            "invalid category '{s}' (valid: {})",
            VALID_CATEGORIES.join(", ")
        )
    })
}

fn parse_role(s: &str) -> Result<Role, String> {
    Role::from_str(s).map_err(|_| format!("invalid role '{s}' (valid: {})", VALID_ROLES.join(", ")))
}

fn parse_ticket_action(s: &str) -> Result<TicketAction, String> {
    TicketAction::from_str(s).map_err(|_| {
        format!(
            "invalid action '{s}' (valid: {})",
            VALID_TICKET_ACTIONS.join(", ")
        )
    })
}

fn parse_user_action(s: &str) -> Result<UserAction, String> {
    UserAction::from_str(s).map_err(|_| {
        format!(
            "invalid action '{s}' (valid: {})",
            VALID_USER_ACTIONS.join(", ")
        )
    })
}

/// Parse a categorical filter value: any valid value for the key, or "all".
/// Returns the canonical lowercase form the filter state stores.
fn parse_filter_value(
    s: &str,
    valid: &[&str],
    parse: impl Fn(&str) -> Result<String, String>,
) -> Result<String, String> {
    if s.eq_ignore_ascii_case("all") {
        return Ok("all".to_string());
    }
    parse(s).map_err(|_| format!("invalid value '{s}' (valid: all, {})", valid.join(", ")))
}

fn parse_status_filter(s: &str) -> Result<String, String> {
    parse_filter_value(s, VALID_STATUSES, |v| {
        parse_status(v).map(|status| status.to_string())
    })
}

fn parse_priority_filter(s: &str) -> Result<String, String> {
    parse_filter_value(s, VALID_PRIORITIES, |v| {
        parse_priority(v).map(|priority| priority.to_string())
    })
}

fn parse_category_filter(s: &str) -> Result<String, String> {
    parse_filter_value(s, VALID_CATEGORIES, |v| {
        parse_category(v).map(|category| category.to_string())
    })
}

fn parse_department_filter(s: &str) -> Result<String, String> {
    parse_filter_value(s, VALID_DEPARTMENTS, |v| {
        crate::types::Department::from_str(v)
            .map(|d| d.to_string())
            .map_err(|e| e.to_string())
    })
}

fn parse_role_filter(s: &str) -> Result<String, String> {
    parse_filter_value(s, VALID_ROLES, |v| parse_role(v).map(|role| role.to_string()))
}

fn parse_user_state_filter(s: &str) -> Result<String, String> {
    let v = s.to_lowercase();
    if v == "all" || VALID_USER_STATES.contains(&v.as_str()) {
        Ok(v)
    } else {
        Err(format!(
            "invalid status '{s}' (valid: all, {})",
            VALID_USER_STATES.join(", ")
        ))
    }
}
