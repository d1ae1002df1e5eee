use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let session = Session::current()?;

    let tasks = Tasks::new()?.fetch(session.user_id, &TaskFilter::default())?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(session.username), true);
    View::tasks(&tasks)?;

    Ok(())
}
