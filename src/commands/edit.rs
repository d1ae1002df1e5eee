use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::task::{Priority, Task, TaskFilter};
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::str::FromStr;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Title of the task to edit
    #[arg(required = true)]
    title: String,

    /// Description of the task to edit
    #[arg(short, long, default_value = "")]
    description: String,

    /// Replacement title
    #[arg(long)]
    new_title: Option<String>,

    /// Replacement description
    #[arg(long)]
    new_description: Option<String>,

    /// Replacement deadline (YYYY-MM-DD)
    #[arg(long)]
    new_deadline: Option<NaiveDate>,

    /// Replacement priority
    #[arg(long, value_enum)]
    new_priority: Option<Priority>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let session = Session::current()?;
    let mut tasks = Tasks::new()?;

    // The first row carrying the content key seeds the edit form; the update
    // itself still touches every row with that key.
    let current = tasks
        .fetch(session.user_id, &TaskFilter::default())?
        .into_iter()
        .find(|t| t.title == args.title && t.description == args.description);
    let current = match current {
        Some(task) => task,
        None => msg_bail_anyhow!(Message::NoMatchingTasks(args.title)),
    };

    let interactive = args.new_title.is_none() && args.new_description.is_none() && args.new_deadline.is_none() && args.new_priority.is_none();

    let replacement = if interactive {
        prompt_replacement(&current)?
    } else {
        Task::new(
            args.new_title.as_deref().unwrap_or(&current.title),
            args.new_description.as_deref().unwrap_or(&current.description),
            args.new_deadline.unwrap_or(current.deadline),
            args.new_priority.unwrap_or(current.priority),
        )
    };

    if replacement.title.trim().is_empty() {
        msg_bail_anyhow!(Message::TaskTitleRequired);
    }

    let affected = tasks.update_matching(session.user_id, &args.title, &args.description, &replacement)?;
    msg_success!(Message::TasksUpdatedCount(affected));

    Ok(())
}

/// Asks for each field, pre-filled with the task's current value.
fn prompt_replacement(current: &Task) -> Result<Task> {
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitleEdit.to_string())
        .with_initial_text(&current.title)
        .interact_text()?;
    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescriptionEdit.to_string())
        .with_initial_text(&current.description)
        .allow_empty(true)
        .interact_text()?;
    let deadline: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDeadlineEdit.to_string())
        .with_initial_text(current.deadline.format("%Y-%m-%d").to_string())
        .interact_text()?;
    let priority: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskPriorityEdit.to_string())
        .with_initial_text(current.priority.as_str())
        .interact_text()?;

    let deadline = NaiveDate::parse_from_str(&deadline, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(deadline.clone())))?;
    let priority = Priority::from_str(&priority).map_err(|value| msg_error_anyhow!(Message::InvalidPriority(value)))?;

    Ok(Task::new(&title, &description, deadline, priority))
}
