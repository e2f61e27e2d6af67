//! Mock authentication session.
//!
//! Login resolves an email against the seeded user directory and records
//! the user id in `.deskhub/session.yaml`. There is no password and no
//! enforcement; the session only decides which user the views render for.
//! Commands load the session once and pass the resolved user down
//! explicitly; nothing reads it ambiently.

use std::fs;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DeskError, Result};
use crate::paths::session_path;
use crate::store::DeskStore;
use crate::types::User;
use crate::utils::is_valid_email;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    /// Mock bearer token; a real auth provider would issue this.
    pub token: String,
    pub logged_in_at: Timestamp,
}

impl Session {
    fn new(user_id: &str) -> Self {
        Session {
            user_id: user_id.to_string(),
            token: Uuid::new_v4().to_string(),
            logged_in_at: Timestamp::now(),
        }
    }

    /// Load the current session, if one exists.
    pub fn load() -> Result<Option<Session>> {
        let path = session_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let session: Session = serde_yaml_ng::from_str(&content)?;
        Ok(Some(session))
    }

    fn save(&self) -> Result<()> {
        let path = session_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_yaml_ng::to_string(self)?)?;
        Ok(())
    }

    /// Remove the session file. Succeeds if no session exists.
    pub fn clear() -> Result<()> {
        let path = session_path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// Log in as the directory user with the given email and persist the session.
pub fn login(store: &DeskStore, email: &str) -> Result<User> {
    if !is_valid_email(email) {
        return Err(DeskError::Other(format!(
            "'{email}' is not a valid email address"
        )));
    }
    let user = store
        .user_by_email(email)
        .ok_or_else(|| DeskError::UserNotFound(email.to_string()))?;
    if !user.active {
        return Err(DeskError::Other(format!(
            "account for '{}' is deactivated",
            user.email
        )));
    }

    Session::new(&user.id).save()?;
    Ok(user)
}

/// Resolve the logged-in user against the directory.
///
/// A session naming a user that no longer exists is treated as logged out.
pub fn current_user(store: &DeskStore) -> Result<Option<User>> {
    match Session::load()? {
        Some(session) => Ok(store.get_user(&session.user_id)),
        None => Ok(None),
    }
}
