use owo_colors::OwoColorize;

use crate::commands::print_json;
use crate::error::Result;
use crate::session::{self, Session};
use crate::store::get_or_init_store;

/// Log in as a directory user by email (mock auth: no password).
pub async fn cmd_login(email: &str) -> Result<()> {
    let store = get_or_init_store().await;
    let user = session::login(&store, email)?;
    println!("Logged in as {} ({})", user.name.bold(), user.role);
    Ok(())
}

/// Clear the current session.
pub fn cmd_logout() -> Result<()> {
    Session::clear()?;
    println!("Logged out");
    Ok(())
}

/// Show the logged-in user.
pub async fn cmd_whoami(json: bool) -> Result<()> {
    let store = get_or_init_store().await;
    let viewer = session::current_user(&store)?;

    if json {
        return print_json(&viewer);
    }

    match viewer {
        Some(user) => {
            println!(
                "{} <{}> · {} · {}",
                user.name.bold(),
                user.email,
                user.department,
                user.role
            );
        }
        None => println!("Not logged in"),
    }
    Ok(())
}
