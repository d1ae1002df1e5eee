use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::task::{Priority, Task};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,

    /// Free-text description
    #[arg(short, long, default_value = "")]
    description: String,

    /// Deadline date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    deadline: Option<NaiveDate>,

    /// Task priority
    #[arg(short, long, value_enum, default_value = "medium")]
    priority: Priority,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let session = Session::current()?;

    if args.title.trim().is_empty() {
        msg_bail_anyhow!(Message::TaskTitleRequired);
    }

    let deadline = args.deadline.unwrap_or_else(|| Local::now().date_naive());
    let task = Task::new(&args.title, &args.description, deadline, args.priority);
    Tasks::new()?.insert(session.user_id, &task)?;

    msg_success!(Message::TaskCreated(task.title));

    Ok(())
}
