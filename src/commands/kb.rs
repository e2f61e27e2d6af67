use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::{api_context, print_json, resolve_record};
use crate::error::{DeskError, Result};
use crate::filter::FilterState;
use crate::utils::format_relative;

/// A row in the knowledge base listing
#[derive(Tabled)]
struct ArticleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Views")]
    views: u32,
    #[tabled(rename = "Updated")]
    updated: String,
}

/// List knowledge base articles, most viewed first.
///
/// Categories here are free-form editorial labels ("IT Support",
/// "HR Policies"), so `--category` takes an exact label rather than an
/// enum value.
pub async fn cmd_kb_ls(search: Option<&str>, category: Option<&str>, json: bool) -> Result<()> {
    let (_config, client) = api_context().await?;

    let mut state = FilterState::new();
    if let Some(query) = search {
        state.query = query.to_string();
    }
    if let Some(category) = category {
        state.set("category", category);
    }

    let articles = client.fetch_articles().await?;
    let mut visible = state.apply(&articles);
    visible.sort_by(|a, b| b.views.cmp(&a.views).then(a.id.cmp(&b.id)));

    if json {
        return print_json(&visible);
    }

    if visible.is_empty() {
        println!("No articles match {}.", state.summary());
        return Ok(());
    }

    let rows: Vec<ArticleRow> = visible
        .iter()
        .map(|a| ArticleRow {
            id: a.id.clone(),
            title: a.title.clone(),
            category: a.category.clone(),
            author: a.author.clone(),
            views: a.views,
            updated: format_relative(a.updated),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("{} articles", visible.len());
    Ok(())
}

/// Display one knowledge base article.
pub async fn cmd_kb_show(id: &str, json: bool) -> Result<()> {
    let (_config, client) = api_context().await?;
    let articles = client.fetch_articles().await?;
    let article = resolve_record(&articles, id, DeskError::ArticleNotFound)?;

    if json {
        return print_json(article);
    }

    println!("{} · {}", article.id.cyan(), article.title.bold());
    println!(
        "{} {}   {} {}",
        "category:".dimmed(),
        article.category,
        "author:".dimmed(),
        article.author
    );
    println!(
        "{} {}   {} {}",
        "views:".dimmed(),
        article.views,
        "updated:".dimmed(),
        format_relative(article.updated)
    );
    Ok(())
}
