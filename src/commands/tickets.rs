use owo_colors::OwoColorize;

use crate::bulk::{self, TicketAction};
use crate::commands::{
    api_context, colored_priority, colored_status, make_notifier, print_json, resolve_record,
    ticket_table,
};
use crate::error::{DeskError, Result};
use crate::filter::FilterState;
use crate::saved::SavedFilterStore;
use crate::selection::SelectionSet;
use crate::session;
use crate::store::get_or_init_store;
use crate::types::{Category, Contact, TicketDraft, TicketPriority};
use crate::utils::{format_relative, iso_date};

/// Filter flags shared by `tickets ls` and `tickets bulk --all`.
/// Values arrive canonicalized by the CLI parsers ("all" included).
#[derive(Debug, Clone, Default)]
pub struct TicketFilterArgs {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

impl TicketFilterArgs {
    fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.category.is_none()
    }

    /// Overlay these flags onto a base filter state.
    fn overlay(&self, state: &mut FilterState) {
        if let Some(query) = &self.search {
            state.query = query.clone();
        }
        if let Some(status) = &self.status {
            state.set("status", status);
        }
        if let Some(priority) = &self.priority {
            state.set("priority", priority);
        }
        if let Some(category) = &self.category {
            state.set("category", category);
        }
    }

    fn into_state(self) -> FilterState {
        let mut state = FilterState::new();
        self.overlay(&mut state);
        state
    }
}

/// List tickets under the active filters.
///
/// `--saved` starts from a saved filter snapshot; explicit flags overlay it.
/// With no flags at all, the default saved filter (if one is marked) is
/// applied.
pub async fn cmd_tickets_ls(
    filters: TicketFilterArgs,
    saved: Option<&str>,
    json: bool,
) -> Result<()> {
    let (_config, client) = api_context().await?;

    let mut state = match saved {
        Some(needle) => SavedFilterStore::load()?.find(needle)?.filters.clone(),
        None if filters.is_empty() => SavedFilterStore::load()?
            .default_filter()
            .map(|f| f.filters.clone())
            .unwrap_or_default(),
        None => FilterState::new(),
    };
    filters.overlay(&mut state);

    let tickets = client.fetch_tickets().await?;
    let visible = state.apply(&tickets);

    if json {
        return print_json(&visible);
    }

    if visible.is_empty() {
        println!("No tickets match {}.", state.summary());
        return Ok(());
    }

    println!("{}", ticket_table(visible.iter().copied()));
    if state.is_unconstrained() {
        println!("{} tickets", visible.len());
    } else {
        println!(
            "{} of {} tickets · {}",
            visible.len(),
            tickets.len(),
            state.summary()
        );
    }
    Ok(())
}

/// Display one ticket with full details.
pub async fn cmd_tickets_show(id: &str, json: bool) -> Result<()> {
    let (_config, client) = api_context().await?;
    let tickets = client.fetch_tickets().await?;
    let ticket = resolve_record(&tickets, id, DeskError::TicketNotFound)?;

    if json {
        return print_json(ticket);
    }

    println!("{} · {}", ticket.id.cyan(), ticket.subject.bold());
    println!(
        "{} {}   {} {}   {} {}",
        "status:".dimmed(),
        colored_status(ticket.status),
        "priority:".dimmed(),
        colored_priority(ticket.priority),
        "category:".dimmed(),
        ticket.category
    );
    println!(
        "{} {}",
        "assignee:".dimmed(),
        ticket.assignee.as_deref().unwrap_or("(unassigned)")
    );
    println!(
        "{} {} <{}>",
        "requester:".dimmed(),
        ticket.requester.name,
        ticket.requester.email
    );
    println!(
        "{} {} ({})",
        "created:".dimmed(),
        iso_date(ticket.created),
        format_relative(ticket.created)
    );
    println!(
        "{} {} ({})",
        "updated:".dimmed(),
        iso_date(ticket.updated),
        format_relative(ticket.updated)
    );
    println!("{} {}%", "ai confidence:".dimmed(), ticket.ai_confidence);
    if let Some(description) = &ticket.description {
        println!();
        println!("{description}");
    }
    Ok(())
}

/// Submit a new ticket as the logged-in user.
pub async fn cmd_tickets_create(
    subject: &str,
    description: Option<&str>,
    priority: TicketPriority,
    category: Category,
    json: bool,
) -> Result<()> {
    let (config, client) = api_context().await?;
    let store = get_or_init_store().await;
    let viewer = session::current_user(&store)?.ok_or(DeskError::NotLoggedIn)?;

    let draft = TicketDraft {
        subject: subject.to_string(),
        description: description.map(str::to_string),
        priority,
        category,
        requester: Contact::new(&viewer.name, &viewer.email),
    };
    let ticket = client.submit_ticket(&draft).await?;

    if json {
        return print_json(&ticket);
    }

    println!("{}", ticket.id);
    let notifier = make_notifier(&config, json);
    notifier.notify(
        "Ticket created",
        &format!("{} · {}", ticket.id, ticket.subject),
    );
    Ok(())
}

/// Apply one action to many tickets.
///
/// `--all` selects every ticket visible under the filter flags; `--ids`
/// names the selection explicitly and ignores the filter flags.
pub async fn cmd_tickets_bulk(
    action: TicketAction,
    ids: Option<Vec<String>>,
    all: bool,
    filters: TicketFilterArgs,
    json: bool,
) -> Result<()> {
    let (config, client) = api_context().await?;
    let notifier = make_notifier(&config, json);

    let mut selection = SelectionSet::new();
    if all {
        let state = filters.into_state();
        let tickets = client.fetch_tickets().await?;
        let visible = state.visible_ids(&tickets);
        selection.toggle_all(&visible);
    } else if let Some(ids) = ids {
        for id in &ids {
            selection.toggle_one(id);
        }
    }

    let report = bulk::dispatch(
        &action.to_string(),
        "tickets",
        &mut selection,
        notifier.as_ref(),
        |id| {
            let client = client.clone();
            async move { client.apply_ticket_action(action, &id).await }
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
