//! Database layer for the taskdesk application.
//!
//! A small persistence layer over SQLite: connection bootstrap with versioned
//! migrations, a credential store for the local user accounts, and a task
//! store with filtered queries and bulk import.

/// Core database connection and initialization.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Per-user task records and filtered queries.
pub mod tasks;

/// User accounts and credential checks.
pub mod users;
