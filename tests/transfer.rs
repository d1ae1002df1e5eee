#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use std::sync::OnceLock;
    use taskdesk::db::tasks::Tasks;
    use taskdesk::libs::task::{Priority, Task, TaskFilter};
    use taskdesk::libs::transfer::{ExportFormat, Exporter, Importer};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static TEST_HOME: OnceLock<TempDir> = OnceLock::new();

    struct TransferTestContext;

    impl TestContext for TransferTestContext {
        fn setup() -> Self {
            TEST_HOME.get_or_init(|| {
                let temp_dir = tempfile::tempdir().unwrap();
                std::env::set_var("HOME", temp_dir.path());
                std::env::set_var("LOCALAPPDATA", temp_dir.path());
                // Apply migrations once before tests share the database
                taskdesk::db::db::Db::new().unwrap();
                temp_dir
            });
            TransferTestContext
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn work_dir() -> std::path::PathBuf {
        TEST_HOME.get().unwrap().path().to_path_buf()
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_csv_round_trip_preserves_visible_fields(_ctx: &mut TransferTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.insert(21, &Task::new("Buy milk", "2%, one gallon", date("2024-01-15"), Priority::Low)).unwrap();
        tasks.insert(21, &Task::new("Pay rent", "", date("2024-01-28"), Priority::High)).unwrap();

        let path = work_dir().join("round_trip.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(21).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Title,Description,Deadline,Priority"));
        assert!(content.contains("Buy milk"));

        // Import into a different owner and compare the visible fields
        let count = Importer::new(path).import(22).unwrap();
        assert_eq!(count, 2);

        let imported = Tasks::new().unwrap().fetch(22, &TaskFilter::default()).unwrap();
        assert_eq!(imported.len(), 2);
        assert_eq!(imported[0].title, "Buy milk");
        assert_eq!(imported[0].description, "2%, one gallon");
        assert_eq!(imported[0].deadline, date("2024-01-15"));
        assert_eq!(imported[0].priority, Priority::Low);
        assert_eq!(imported[1].title, "Pay rent");
        assert_eq!(imported[1].description, "");
        assert_eq!(imported[1].priority, Priority::High);
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_rejects_wrong_header(_ctx: &mut TransferTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.insert(23, &Task::new("Existing", "", date("2024-02-01"), Priority::Medium)).unwrap();

        let path = work_dir().join("wrong_header.csv");
        fs::write(&path, "Name,Notes,Due,Importance\nBuy milk,,2024-01-15,Low\n").unwrap();

        let result = Importer::new(path).import(23);
        assert!(result.is_err());

        // Existing tasks are untouched and nothing was appended
        let stored = Tasks::new().unwrap().fetch(23, &TaskFilter::default()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "Existing");
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_rejects_malformed_rows_without_partial_writes(_ctx: &mut TransferTestContext) {
        let path = work_dir().join("bad_row.csv");
        fs::write(
            &path,
            "Title,Description,Deadline,Priority\nGood row,,2024-03-01,Low\nBad row,,not-a-date,High\n",
        )
        .unwrap();

        let result = Importer::new(path).import(24);
        assert!(result.is_err());

        // The valid first row must not have been inserted
        let stored = Tasks::new().unwrap().fetch(24, &TaskFilter::default()).unwrap();
        assert!(stored.is_empty());
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_rejects_unknown_priority(_ctx: &mut TransferTestContext) {
        let path = work_dir().join("bad_priority.csv");
        fs::write(&path, "Title,Description,Deadline,Priority\nTask,,2024-03-01,Urgent\n").unwrap();

        assert!(Importer::new(path).import(25).is_err());
        assert!(Tasks::new().unwrap().fetch(25, &TaskFilter::default()).unwrap().is_empty());
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_repeated_import_appends_duplicates(_ctx: &mut TransferTestContext) {
        let path = work_dir().join("repeat.csv");
        fs::write(&path, "Title,Description,Deadline,Priority\nRecurring,,2024-04-01,Medium\n").unwrap();

        Importer::new(path.clone()).import(26).unwrap();
        Importer::new(path).import(26).unwrap();

        // Import appends; it does not replace previously stored rows
        let stored = Tasks::new().unwrap().fetch(26, &TaskFilter::default()).unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_export_json_contains_visible_fields(_ctx: &mut TransferTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.insert(27, &Task::new("Ship release", "tag and publish", date("2024-05-01"), Priority::High)).unwrap();

        let path = work_dir().join("tasks.json");
        Exporter::new(ExportFormat::Json, Some(path.clone())).export(27).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["title"], "Ship release");
        assert_eq!(rows[0]["description"], "tag and publish");
        assert_eq!(rows[0]["deadline"], "2024-05-01");
        assert_eq!(rows[0]["priority"], "High");
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_missing_file_fails(_ctx: &mut TransferTestContext) {
        let path = work_dir().join("does_not_exist.csv");
        assert!(Importer::new(path).import(28).is_err());
    }
}
