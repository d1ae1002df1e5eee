#[derive(Debug, Clone)]
pub enum Message {
    // === ACCOUNT MESSAGES ===
    UserRegistered(String),
    UsernameTaken(String),
    UsernameRequired,
    PasswordRequired,
    LoggedIn(String),
    LoggedOut,
    NotLoggedIn,
    InvalidCredentials,

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskTitleRequired,
    TasksUpdatedCount(usize),
    TasksDeletedCount(usize),
    NoMatchingTasks(String),
    NoTasksFound,
    TasksHeader(String),
    ConfirmDeleteTask(String),
    DeleteCancelled,
    PromptPassword,
    PromptPasswordConfirm,
    PasswordMismatch,
    PromptTaskTitleEdit,
    PromptTaskDescriptionEdit,
    PromptTaskDeadlineEdit,
    PromptTaskPriorityEdit,

    // === FILTER MESSAGES ===
    IncompleteDateRange,
    InvalidDate(String),
    InvalidPriority(String),

    // === IMPORT/EXPORT MESSAGES ===
    ExportCompleted(String),
    ImportCompleted(usize, String),
    ImportHeaderMismatch,
    ImportRowMalformed(usize),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),

    // === FILE SYSTEM MESSAGES ===
    FileNotFound(String),
    SessionReadError,
}
