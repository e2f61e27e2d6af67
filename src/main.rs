use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use deskhub::cli::{Cli, Commands, ConfigCmd, FilterCmd, KbCmd, TicketCmd, UserCmd, print_completions};
use deskhub::commands::{
    SaveFilterArgs, TicketFilterArgs, UserFilterArgs, cmd_config_get, cmd_config_set,
    cmd_config_show, cmd_dashboard, cmd_filters_default, cmd_filters_ls, cmd_filters_rm,
    cmd_filters_save, cmd_kb_ls, cmd_kb_show, cmd_login, cmd_logout, cmd_tickets_bulk,
    cmd_tickets_create, cmd_tickets_ls, cmd_tickets_show, cmd_users_bulk, cmd_users_ls, cmd_whoami,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout stays clean for --json consumers.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tickets { action } => match action {
            TicketCmd::Ls {
                search,
                status,
                priority,
                category,
                saved,
                json,
            } => {
                let filters = TicketFilterArgs {
                    search,
                    status,
                    priority,
                    category,
                };
                cmd_tickets_ls(filters, saved.as_deref(), json).await
            }
            TicketCmd::Show { id, json } => cmd_tickets_show(&id, json).await,
            TicketCmd::Create {
                subject,
                description,
                priority,
                category,
                json,
            } => cmd_tickets_create(&subject, description.as_deref(), priority, category, json).await,
            TicketCmd::Bulk {
                action,
                ids,
                all,
                search,
                status,
                priority,
                category,
                json,
            } => {
                let filters = TicketFilterArgs {
                    search,
                    status,
                    priority,
                    category,
                };
                cmd_tickets_bulk(action, ids, all, filters, json).await
            }
        },

        Commands::Users { action } => match action {
            UserCmd::Ls {
                search,
                department,
                role,
                status,
                json,
            } => {
                let filters = UserFilterArgs {
                    search,
                    department,
                    role,
                    status,
                };
                cmd_users_ls(filters, json).await
            }
            UserCmd::Bulk {
                action,
                ids,
                all,
                search,
                department,
                role,
                status,
                json,
            } => {
                let filters = UserFilterArgs {
                    search,
                    department,
                    role,
                    status,
                };
                cmd_users_bulk(action, ids, all, filters, json).await
            }
        },

        Commands::Kb { action } => match action {
            KbCmd::Ls {
                search,
                category,
                json,
            } => cmd_kb_ls(search.as_deref(), category.as_deref(), json).await,
            KbCmd::Show { id, json } => cmd_kb_show(&id, json).await,
        },

        Commands::Filters { action } => match action {
            FilterCmd::Save {
                name,
                search,
                status,
                priority,
                category,
                department,
                role,
            } => {
                let args = SaveFilterArgs {
                    search,
                    status,
                    priority,
                    category,
                    department,
                    role,
                };
                cmd_filters_save(&name, args)
            }
            FilterCmd::Ls { json } => cmd_filters_ls(json),
            FilterCmd::Rm { filter } => cmd_filters_rm(&filter),
            FilterCmd::Default { filter } => cmd_filters_default(&filter),
        },

        Commands::Dashboard { role, json } => cmd_dashboard(role, json).await,

        Commands::Login { email } => cmd_login(&email).await,
        Commands::Logout => cmd_logout(),
        Commands::Whoami { json } => cmd_whoami(json).await,

        Commands::Config { action } => match action {
            ConfigCmd::Show => cmd_config_show(),
            ConfigCmd::Get { key } => cmd_config_get(&key),
            ConfigCmd::Set { key, value } => cmd_config_set(&key, &value),
        },

        Commands::Completions { shell } => {
            print_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
