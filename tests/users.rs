#[cfg(test)]
mod tests {
    use std::sync::OnceLock;
    use taskdesk::db::users::Users;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // One data directory per test binary; tests use distinct usernames so the
    // shared database keeps them independent.
    static TEST_HOME: OnceLock<TempDir> = OnceLock::new();

    struct UserTestContext;

    impl TestContext for UserTestContext {
        fn setup() -> Self {
            TEST_HOME.get_or_init(|| {
                let temp_dir = tempfile::tempdir().unwrap();
                std::env::set_var("HOME", temp_dir.path());
                std::env::set_var("LOCALAPPDATA", temp_dir.path());
                // Apply migrations once before tests share the database
                taskdesk::db::db::Db::new().unwrap();
                temp_dir
            });
            UserTestContext
        }
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_register_and_login(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();

        let id = users.register("alice", "secret").unwrap();
        assert!(id > 0);

        // Exact credentials succeed
        let user = users.verify("alice", "secret").unwrap().unwrap();
        assert_eq!(user.id, Some(id));
        assert_eq!(user.username, "alice");

        // Wrong password or unknown user fails
        assert!(users.verify("alice", "wrong").unwrap().is_none());
        assert!(users.verify("bob", "secret").unwrap().is_none());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_duplicate_registration_rejected(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();

        let first_id = users.register("carol", "first").unwrap();
        let result = users.register("carol", "second");
        assert!(result.is_err());

        // The first registration wins: its password is retained
        assert!(users.verify("carol", "first").unwrap().is_some());
        assert!(users.verify("carol", "second").unwrap().is_none());
        assert_eq!(users.get_id("carol").unwrap(), Some(first_id));
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_get_id_for_unknown_user(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();

        assert_eq!(users.get_id("nobody").unwrap(), None);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_login_is_case_sensitive(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();

        users.register("Dave", "pw").unwrap();
        assert!(users.verify("dave", "pw").unwrap().is_none());
        assert!(users.verify("Dave", "PW").unwrap().is_none());
        assert!(users.verify("Dave", "pw").unwrap().is_some());
    }
}
