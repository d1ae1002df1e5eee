use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority. Stored in the database and in CSV cells as its exact label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub priority: Priority,
}

impl Task {
    pub fn new(title: &str, description: &str, deadline: NaiveDate, priority: Priority) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            deadline,
            priority,
        }
    }
}

/// Conjunctive task query. Every `None` field leaves that column unrestricted,
/// so the default filter is equivalent to listing all tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title or description.
    pub text: Option<String>,
    pub priority: Option<Priority>,
    /// Inclusive deadline range; only applied when both bounds are present.
    pub due: Option<(NaiveDate, NaiveDate)>,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.priority.is_none() && self.due.is_none()
    }
}
