//! Credential store backed by the `users` table.
//!
//! Registration and login for the single local operator. Passwords are
//! compared verbatim; the login check succeeds only when both username and
//! password match exactly.

use super::db::Db;
use crate::libs::messages::Message;
use crate::libs::user::User;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_USER: &str = "INSERT INTO users (username, password) VALUES (?1, ?2)";
const SELECT_USER_BY_CREDENTIALS: &str = "SELECT id, username, password FROM users WHERE username = ?1 AND password = ?2";
const SELECT_USER_ID: &str = "SELECT id FROM users WHERE username = ?1";

pub struct Users {
    pub conn: Connection,
}

impl Users {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Registers a new user and returns the assigned id.
    ///
    /// Fails when the username is already taken; the existing record is left
    /// untouched.
    pub fn register(&mut self, username: &str, password: &str) -> Result<i64> {
        if self.get_id(username)?.is_some() {
            return Err(msg_error_anyhow!(Message::UsernameTaken(username.to_string())));
        }
        self.conn.execute(INSERT_USER, params![username, password])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns the user record when both fields match exactly.
    pub fn verify(&mut self, username: &str, password: &str) -> Result<Option<User>> {
        self.conn
            .query_row(SELECT_USER_BY_CREDENTIALS, params![username, password], |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password: row.get(2)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Resolves a username to its id, if registered.
    pub fn get_id(&mut self, username: &str) -> Result<Option<i64>> {
        self.conn
            .query_row(SELECT_USER_ID, params![username], |row| row.get(0))
            .optional()
            .map_err(Into::into)
    }
}
