//! # Taskdesk - Personal Task Manager
//!
//! A command-line manager for personal task records backed by a local
//! SQLite database.
//!
//! ## Features
//!
//! - **Accounts**: Register and log in; tasks are scoped per user
//! - **Task Management**: Create, edit, delete, and list tasks with
//!   deadlines and priorities
//! - **Filtering**: Combine text, priority, and deadline-range filters
//! - **Data Exchange**: Export tasks to CSV or JSON, import from CSV
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
