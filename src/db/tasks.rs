//! Task store backed by the `tasks` table.
//!
//! Every operation is scoped to an owning user. Filtering is assembled as a
//! clause list with bound parameters only; user input is never interpolated
//! into SQL text.
//!
//! Edit and delete locate rows by exact `(title, description, owner)`
//! equality, the content key the rest of the application presents to users.
//! When duplicate rows share a content key, all of them are affected; callers
//! receive the row count and decide what to surface.

use super::db::Db;
use crate::libs::task::{Priority, Task, TaskFilter};
use anyhow::Result;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::str::FromStr;

const INSERT_TASK: &str = "INSERT INTO tasks (user_id, title, description, deadline, priority) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_TASKS: &str = "SELECT id, title, description, deadline, priority FROM tasks WHERE user_id = ?";
const AND_TEXT: &str = "AND (title LIKE ? OR description LIKE ?)";
const AND_PRIORITY: &str = "AND priority = ?";
const AND_DEADLINE: &str = "AND deadline BETWEEN ? AND ?";
const ORDER_BY_ID: &str = "ORDER BY id";
const UPDATE_MATCHING: &str = "UPDATE tasks
    SET title = ?1, description = ?2, deadline = ?3, priority = ?4
    WHERE title = ?5 AND description = ?6 AND user_id = ?7";
const DELETE_MATCHING: &str = "DELETE FROM tasks WHERE title = ?1 AND description = ?2 AND user_id = ?3";

fn read_task_row(row: &Row) -> rusqlite::Result<Task> {
    let priority: String = row.get(4)?;
    let priority = Priority::from_str(&priority).map_err(|value| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, format!("unknown priority '{}'", value).into())
    })?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        deadline: row.get(3)?,
        priority,
    })
}

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    pub fn insert(&mut self, user_id: i64, task: &Task) -> Result<()> {
        self.conn.execute(
            INSERT_TASK,
            params![user_id, task.title, task.description, task.deadline, task.priority.as_str()],
        )?;

        Ok(())
    }

    /// Fetches the owner's tasks matching `filter`, in insertion order.
    ///
    /// Each filter field contributes one conjunctive clause; an empty filter
    /// returns everything the owner has. The deadline range relies on
    /// ISO-8601 text ordering, which matches chronological order.
    pub fn fetch(&mut self, user_id: i64, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut clauses = vec![SELECT_TASKS.to_string()];
        let mut values: Vec<Value> = vec![Value::from(user_id)];

        if let Some(text) = &filter.text {
            let pattern = format!("%{}%", text);
            clauses.push(AND_TEXT.to_string());
            values.push(Value::from(pattern.clone()));
            values.push(Value::from(pattern));
        }
        if let Some(priority) = filter.priority {
            clauses.push(AND_PRIORITY.to_string());
            values.push(Value::from(priority.as_str().to_string()));
        }
        if let Some((start, end)) = filter.due {
            clauses.push(AND_DEADLINE.to_string());
            values.push(Value::from(start.format("%Y-%m-%d").to_string()));
            values.push(Value::from(end.format("%Y-%m-%d").to_string()));
        }
        clauses.push(ORDER_BY_ID.to_string());

        let mut stmt = self.conn.prepare(&clauses.join(" "))?;
        let task_iter = stmt.query_map(params_from_iter(values.iter()), read_task_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Overwrites all four mutable fields on every row matching the content
    /// key. Returns the number of rows affected (0, 1, or more).
    pub fn update_matching(&mut self, user_id: i64, match_title: &str, match_description: &str, task: &Task) -> Result<usize> {
        let affected = self.conn.execute(
            UPDATE_MATCHING,
            params![
                task.title,
                task.description,
                task.deadline,
                task.priority.as_str(),
                match_title,
                match_description,
                user_id
            ],
        )?;
        Ok(affected)
    }

    /// Deletes every row matching the content key. Returns the number of rows
    /// affected.
    pub fn delete_matching(&mut self, user_id: i64, match_title: &str, match_description: &str) -> Result<usize> {
        let affected = self.conn.execute(DELETE_MATCHING, params![match_title, match_description, user_id])?;
        Ok(affected)
    }

    /// Appends imported rows for the owner. Existing rows are not removed, so
    /// importing the same file twice stores every row twice.
    pub fn import_rows(&mut self, user_id: i64, tasks: &[Task]) -> Result<usize> {
        for task in tasks {
            self.insert(user_id, task)?;
        }
        Ok(tasks.len())
    }
}
