pub mod bulk;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod notify;
pub mod paths;
pub mod saved;
pub mod selection;
pub mod session;
pub mod store;
pub mod types;
pub mod utils;

pub use bulk::{BulkFailure, BulkReport, TicketAction, UserAction};
pub use config::Config;
pub use dashboard::{Dashboard, DashboardKind};
pub use error::{DeskError, Result};
pub use filter::{FilterState, Filterable};
pub use notify::{ConsoleNotifier, MemoryNotifier, Notifier};
pub use saved::{SavedFilter, SavedFilterStore};
pub use selection::SelectionSet;
pub use session::Session;
pub use store::{ApiClient, DeskStore, HelpdeskApi, get_or_init_store};
pub use types::{
    Article, Category, Contact, Department, Role, Ticket, TicketDraft, TicketPriority,
    TicketStatus, User,
};
