//! Display implementation for taskdesk application messages.
//!
//! Converts structured `Message` variants into the human-readable text shown
//! in the terminal. All user-facing wording lives here, so tone and phrasing
//! stay consistent and parameter interpolation stays type-safe.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ACCOUNT MESSAGES ===
            Message::UserRegistered(name) => format!("User '{}' registered successfully", name),
            Message::UsernameTaken(name) => format!("A user named '{}' is already registered", name),
            Message::UsernameRequired => "Username cannot be empty".to_string(),
            Message::PasswordRequired => "Password cannot be empty".to_string(),
            Message::LoggedIn(name) => format!("Logged in as '{}'", name),
            Message::LoggedOut => "Logged out".to_string(),
            Message::NotLoggedIn => "Not logged in. Run 'taskdesk login <username>' first".to_string(),
            Message::InvalidCredentials => "Invalid username or password".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskTitleRequired => "Task title cannot be empty".to_string(),
            Message::TasksUpdatedCount(count) => format!("Updated {} task(s)", count),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s)", count),
            Message::NoMatchingTasks(title) => format!("No task matches '{}'", title),
            Message::NoTasksFound => "No tasks yet".to_string(),
            Message::TasksHeader(name) => format!("Tasks for {}", name),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::DeleteCancelled => "Nothing deleted".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptPasswordConfirm => "Confirm password".to_string(),
            Message::PasswordMismatch => "Passwords do not match".to_string(),
            Message::PromptTaskTitleEdit => "Title".to_string(),
            Message::PromptTaskDescriptionEdit => "Description".to_string(),
            Message::PromptTaskDeadlineEdit => "Deadline (YYYY-MM-DD)".to_string(),
            Message::PromptTaskPriorityEdit => "Priority (Low, Medium, High)".to_string(),

            // === FILTER MESSAGES ===
            Message::IncompleteDateRange => "Both --from and --to are required to filter by deadline".to_string(),
            Message::InvalidDate(value) => format!("'{}' is not a valid date (expected YYYY-MM-DD)", value),
            Message::InvalidPriority(value) => format!("'{}' is not a valid priority (expected Low, Medium or High)", value),

            // === IMPORT/EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to: {}", path),
            Message::ImportCompleted(count, path) => format!("Imported {} task(s) from: {}", count, path),
            Message::ImportHeaderMismatch => "The selected file is not a taskdesk CSV file".to_string(),
            Message::ImportRowMalformed(line) => format!("Malformed CSV row at line {}", line),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations applied".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),

            // === FILE SYSTEM MESSAGES ===
            Message::FileNotFound(path) => format!("File not found: {}", path),
            Message::SessionReadError => "Failed to read the session file".to_string(),
        };
        write!(f, "{}", text)
    }
}
