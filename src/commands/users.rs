use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::bulk::{self, UserAction};
use crate::commands::{api_context, make_notifier, print_json};
use crate::error::Result;
use crate::filter::FilterState;
use crate::selection::SelectionSet;
use crate::types::User;
use crate::utils::format_relative;

/// Filter flags shared by `users ls` and `users bulk --all`.
#[derive(Debug, Clone, Default)]
pub struct UserFilterArgs {
    pub search: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

impl UserFilterArgs {
    fn into_state(self) -> FilterState {
        let mut state = FilterState::new();
        if let Some(query) = self.search {
            state.query = query;
        }
        if let Some(department) = self.department {
            state.set("department", &department);
        }
        if let Some(role) = self.role {
            state.set("role", &role);
        }
        if let Some(status) = self.status {
            state.set("status", &status);
        }
        state
    }
}

/// A row in the user directory table
#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Last Active")]
    last_active: String,
}

fn user_rows<'a>(users: impl IntoIterator<Item = &'a User>) -> Vec<UserRow> {
    users
        .into_iter()
        .map(|u| UserRow {
            id: u.id.clone(),
            name: u.name.clone(),
            email: u.email.clone(),
            department: u.department.to_string(),
            role: u.role.to_string(),
            status: u.state().to_string(),
            last_active: format_relative(u.last_active),
        })
        .collect()
}

/// List directory users under the active filters.
pub async fn cmd_users_ls(filters: UserFilterArgs, json: bool) -> Result<()> {
    let (_config, client) = api_context().await?;
    let state = filters.into_state();

    let users = client.fetch_users().await?;
    let visible = state.apply(&users);

    if json {
        return print_json(&visible);
    }

    if visible.is_empty() {
        println!("No users match {}.", state.summary());
        return Ok(());
    }

    let mut table = Table::new(user_rows(visible.iter().copied()));
    table.with(Style::rounded());
    println!("{table}");
    if state.is_unconstrained() {
        println!("{} users", visible.len());
    } else {
        println!(
            "{} of {} users · {}",
            visible.len(),
            users.len(),
            state.summary()
        );
    }
    Ok(())
}

/// Apply one action to many users.
pub async fn cmd_users_bulk(
    action: UserAction,
    ids: Option<Vec<String>>,
    all: bool,
    filters: UserFilterArgs,
    json: bool,
) -> Result<()> {
    let (config, client) = api_context().await?;
    let notifier = make_notifier(&config, json);

    let mut selection = SelectionSet::new();
    if all {
        let state = filters.into_state();
        let users = client.fetch_users().await?;
        let visible = state.visible_ids(&users);
        selection.toggle_all(&visible);
    } else if let Some(ids) = ids {
        for id in &ids {
            selection.toggle_one(id);
        }
    }

    let report = bulk::dispatch(
        &action.to_string(),
        "users",
        &mut selection,
        notifier.as_ref(),
        |id| {
            let client = client.clone();
            async move { client.apply_user_action(action, &id).await }
        },
    )
    .await?;

    if json {
        return print_json(&report);
    }
    for failure in &report.failed {
        println!("  {} {}", failure.id.red(), failure.reason.dimmed());
    }
    Ok(())
}
