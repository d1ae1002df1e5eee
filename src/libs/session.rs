//! Logged-in user state persisted between command invocations.
//!
//! The original design kept the current user as ambient process state; here it
//! is an explicit `Session` value that every task command loads and passes to
//! the stores. Login writes the session file into the application data
//! directory, logout removes it.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::user::User;
use crate::{msg_error_anyhow, msg_debug};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;

pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
}

impl Session {
    /// Opens a session for a verified user and persists it.
    pub fn open(user: &User) -> Result<Self> {
        let session = Session {
            user_id: user.id.ok_or_else(|| msg_error_anyhow!(Message::SessionReadError))?,
            username: user.username.clone(),
        };
        session.save()?;
        Ok(session)
    }

    /// Returns the active session, or fails when no one is logged in.
    pub fn current() -> Result<Self> {
        Self::load()?.ok_or_else(|| msg_error_anyhow!(Message::NotLoggedIn))
    }

    pub fn load() -> Result<Option<Self>> {
        let path = DataStorage::new().get_path(SESSION_FILE_NAME)?;
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let session = serde_json::from_str(&contents).map_err(|e| {
            msg_debug!(format!("Session parse failure: {}", e));
            msg_error_anyhow!(Message::SessionReadError)
        })?;
        Ok(Some(session))
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(SESSION_FILE_NAME)?;
        let mut file = File::create(path)?;
        file.write_all(serde_json::to_string_pretty(self)?.as_bytes())?;
        Ok(())
    }

    /// Removes the session file. A no-op when nobody is logged in.
    pub fn clear() -> Result<bool> {
        let path = DataStorage::new().get_path(SESSION_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(path)?;
            return Ok(true);
        }
        Ok(false)
    }
}
