use owo_colors::OwoColorize;

use crate::commands::{api_context, print_json, ticket_table};
use crate::dashboard::{self, DashboardKind};
use crate::error::Result;
use crate::session;
use crate::store::get_or_init_store;
use crate::types::Role;
use crate::utils::format_relative;

/// Render the dashboard for the viewer's role.
///
/// `--role` overrides the layout; otherwise the logged-in user's role
/// decides, falling back to the employee layout when logged out.
pub async fn cmd_dashboard(role_override: Option<Role>, json: bool) -> Result<()> {
    let (_config, client) = api_context().await?;
    let store = get_or_init_store().await;
    let viewer = session::current_user(&store)?;

    let kind = DashboardKind::for_role(role_override.or(viewer.as_ref().map(|u| u.role)));
    let (tickets, users, articles) = tokio::try_join!(
        client.fetch_tickets(),
        client.fetch_users(),
        client.fetch_articles()
    )?;

    let dash = dashboard::build(kind, viewer.as_ref(), &tickets, &users, &articles);

    if json {
        return print_json(&dash);
    }

    println!("{}", dash.heading.bold());
    match &viewer {
        Some(user) => println!("{} {} ({})", "viewer:".dimmed(), user.name, user.role),
        None => println!("{}", "not logged in".dimmed()),
    }
    println!();

    let stats: Vec<String> = dash
        .stats
        .iter()
        .map(|s| format!("{}: {}", s.label.dimmed(), s.value.bold()))
        .collect();
    println!("{}", stats.join("  ·  "));
    println!();

    println!("{}", dash.tickets_heading.bold());
    if dash.tickets.is_empty() {
        println!("(none)");
    } else {
        println!("{}", ticket_table(dash.tickets.iter()));
    }

    if !dash.articles.is_empty() {
        println!();
        println!("{}", "Popular Articles".bold());
        for article in &dash.articles {
            println!(
                "  {} {} ({} views, {})",
                article.id.cyan(),
                article.title,
                article.views,
                format_relative(article.updated)
            );
        }
    }
    Ok(())
}
