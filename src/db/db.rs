use crate::db::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::time::Duration;

pub const DB_FILE_NAME: &str = "taskdesk.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database and brings its schema up to date.
    ///
    /// The connection lives for as long as the owning store; commands open it
    /// once and reuse it for every statement they run.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn: Connection = Connection::open(db_file_path)?;
        // Another handle may hold the write lock briefly; wait instead of failing
        conn.busy_timeout(Duration::from_secs(5))?;
        // The foreign-key declaration on `tasks` is intentionally non-enforced
        // (see spec). Some SQLite builds default this pragma to ON, so pin it to
        // SQLite's standard default before any statements run. Must happen
        // outside a transaction, hence before migrations.
        conn.pragma_update(None, "foreign_keys", false)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
