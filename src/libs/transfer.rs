//! CSV and JSON exchange for task records.
//!
//! Export writes the visible task fields in a fixed 4-column layout; import
//! reads the same layout back. The header row is the file-format contract:
//! import refuses the whole file unless the header equals [`CSV_HEADER`]
//! exactly, and no rows are written in that case.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, Task, TaskFilter};
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

/// Column labels of the exchange format, in order.
pub const CSV_HEADER: [&str; 4] = ["Title", "Description", "Deadline", "Priority"];

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, the round-trip format accepted by import.
    Csv,
    /// Structured JSON with the same four fields per task.
    Json,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter, generating a timestamped default file name when no
    /// output path is given (e.g. `taskdesk_export_20250115_143022.csv`).
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("taskdesk_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Exports every task owned by `user_id` to the configured destination.
    pub fn export(&self, user_id: i64) -> Result<()> {
        let tasks = Tasks::new()?.fetch(user_id, &TaskFilter::default())?;

        match self.format {
            ExportFormat::Csv => self.export_csv(&tasks)?,
            ExportFormat::Json => self.export_json(&tasks)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, tasks: &[Task]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(CSV_HEADER)?;

        for task in tasks {
            wtr.write_record(&[
                task.title.clone(),
                task.description.clone(),
                task.deadline.format("%Y-%m-%d").to_string(),
                task.priority.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, tasks: &[Task]) -> Result<()> {
        #[derive(serde::Serialize)]
        struct Row<'a> {
            title: &'a str,
            description: &'a str,
            deadline: String,
            priority: &'a str,
        }

        let rows: Vec<Row> = tasks
            .iter()
            .map(|t| Row {
                title: &t.title,
                description: &t.description,
                deadline: t.deadline.format("%Y-%m-%d").to_string(),
                priority: t.priority.as_str(),
            })
            .collect();

        let mut file = File::create(&self.output_path)?;
        file.write_all(serde_json::to_string_pretty(&rows)?.as_bytes())?;
        Ok(())
    }
}

pub struct Importer {
    input_path: PathBuf,
}

impl Importer {
    pub fn new(input_path: PathBuf) -> Self {
        Self { input_path }
    }

    /// Imports tasks for `user_id` from the configured CSV file.
    ///
    /// The whole file is parsed before anything is inserted: a header mismatch
    /// or a malformed row rejects the import without touching the store.
    /// Accepted rows are appended; existing tasks are left in place.
    pub fn import(&self, user_id: i64) -> Result<usize> {
        if !self.input_path.exists() {
            msg_bail_anyhow!(Message::FileNotFound(self.input_path.display().to_string()));
        }

        let mut rdr = csv::ReaderBuilder::new().has_headers(false).from_path(&self.input_path)?;
        let mut records = rdr.records();

        let header = match records.next() {
            Some(record) => record?,
            None => msg_bail_anyhow!(Message::ImportHeaderMismatch),
        };
        if header.iter().ne(CSV_HEADER) {
            msg_bail_anyhow!(Message::ImportHeaderMismatch);
        }

        let mut tasks = Vec::new();
        for (index, record) in records.enumerate() {
            let record = record?;
            // Header occupies line 1; data rows start at line 2.
            let line = index + 2;
            tasks.push(Self::parse_row(&record, line)?);
        }

        Tasks::new()?.import_rows(user_id, &tasks)?;
        Ok(tasks.len())
    }

    fn parse_row(record: &csv::StringRecord, line: usize) -> Result<Task> {
        if record.len() != CSV_HEADER.len() {
            msg_bail_anyhow!(Message::ImportRowMalformed(line));
        }

        let deadline = NaiveDate::parse_from_str(&record[2], "%Y-%m-%d")
            .map_err(|_| msg_error_anyhow!(Message::InvalidDate(record[2].to_string())))?;
        let priority = Priority::from_str(&record[3]).map_err(|value| msg_error_anyhow!(Message::InvalidPriority(value)))?;

        Ok(Task::new(&record[0], &record[1], deadline, priority))
    }
}
