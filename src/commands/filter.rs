use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::task::{Priority, TaskFilter};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Substring matched against title or description (case-insensitive)
    #[arg(short, long)]
    text: Option<String>,

    /// Exact priority match
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    /// Earliest deadline (YYYY-MM-DD, inclusive)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Latest deadline (YYYY-MM-DD, inclusive)
    #[arg(long)]
    to: Option<NaiveDate>,
}

pub fn cmd(args: FilterArgs) -> Result<()> {
    let session = Session::current()?;

    let due = match (args.from, args.to) {
        (Some(from), Some(to)) => Some((from, to)),
        (None, None) => None,
        _ => msg_bail_anyhow!(Message::IncompleteDateRange),
    };

    let filter = TaskFilter {
        // An empty --text restricts nothing, same as omitting it.
        text: args.text.filter(|text| !text.is_empty()),
        priority: args.priority,
        due,
    };

    let tasks = Tasks::new()?.fetch(session.user_id, &filter)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::tasks(&tasks)?;

    Ok(())
}
