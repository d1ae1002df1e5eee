#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use taskdesk::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};

    #[test]
    fn test_fresh_database_is_migrated_to_latest() {
        let mut conn = Connection::open_in_memory().unwrap();

        assert!(needs_migration(&conn).unwrap());
        init_with_migrations(&mut conn).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 1);
        assert!(!needs_migration(&conn).unwrap());

        let manager = MigrationManager::new();
        assert!(manager.is_migration_applied(&conn, 1).unwrap());
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();

        init_with_migrations(&mut conn).unwrap();
        init_with_migrations(&mut conn).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 1);
    }

    #[test]
    fn test_migration_history_is_recorded() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        let manager = MigrationManager::new();
        let history = manager.get_migration_history(&conn).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].0, 1);
        assert_eq!(history[0].1, "create_users_and_tasks");
    }

    #[test]
    fn test_migrated_schema_accepts_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        conn.execute("INSERT INTO users (username, password) VALUES ('alice', 'secret')", []).unwrap();
        conn.execute(
            "INSERT INTO tasks (user_id, title, description, deadline, priority) VALUES (1, 'Task', '', '2024-01-15', 'Low')",
            [],
        )
        .unwrap();

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
    }
}
