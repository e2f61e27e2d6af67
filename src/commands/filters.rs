use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::Result;
use crate::filter::FilterState;
use crate::saved::SavedFilterStore;
use crate::utils::format_relative;

use super::print_json;

/// Flag values for `filters save`; already canonicalized by the CLI parsers.
#[derive(Debug, Clone, Default)]
pub struct SaveFilterArgs {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
}

impl SaveFilterArgs {
    fn into_state(self) -> FilterState {
        let mut state = FilterState::new();
        if let Some(query) = self.search {
            state.query = query;
        }
        for (key, value) in [
            ("status", self.status),
            ("priority", self.priority),
            ("category", self.category),
            ("department", self.department),
            ("role", self.role),
        ] {
            if let Some(value) = value {
                state.set(key, &value);
            }
        }
        state
    }
}

/// Snapshot the given filter flags under a name.
pub fn cmd_filters_save(name: &str, args: SaveFilterArgs) -> Result<()> {
    let mut store = SavedFilterStore::load()?;
    let state = args.into_state();
    let saved = store.add(name, state)?;
    println!(
        "Saved filter '{}' ({}) · {}",
        saved.name,
        saved.id.cyan(),
        saved.filters.summary()
    );
    store.save()
}

/// A row in the saved filter listing
#[derive(Tabled)]
struct FilterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Default")]
    default: String,
    #[tabled(rename = "Filters")]
    filters: String,
    #[tabled(rename = "Created")]
    created: String,
}

/// List saved filters.
pub fn cmd_filters_ls(json: bool) -> Result<()> {
    let store = SavedFilterStore::load()?;

    if json {
        return print_json(&store.all());
    }

    if store.is_empty() {
        println!("No saved filters.");
        return Ok(());
    }

    let rows: Vec<FilterRow> = store
        .all()
        .iter()
        .map(|f| FilterRow {
            id: f.id.clone(),
            name: f.name.clone(),
            default: if f.is_default { "*".to_string() } else { String::new() },
            filters: f.filters.summary(),
            created: format_relative(f.created),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    Ok(())
}

/// Delete a saved filter by id or unambiguous name.
pub fn cmd_filters_rm(needle: &str) -> Result<()> {
    let mut store = SavedFilterStore::load()?;
    let removed = store.remove(needle)?;
    store.save()?;
    println!("Removed saved filter '{}'", removed.name);
    Ok(())
}

/// Toggle the default flag on a saved filter.
pub fn cmd_filters_default(needle: &str) -> Result<()> {
    let mut store = SavedFilterStore::load()?;
    let toggled = store.toggle_default(needle)?;
    let message = if toggled.is_default {
        format!("'{}' is now the default filter", toggled.name)
    } else {
        format!("'{}' is no longer the default filter", toggled.name)
    };
    store.save()?;
    println!("{message}");
    Ok(())
}
