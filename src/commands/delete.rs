use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Title of the task to delete
    #[arg(required = true)]
    title: String,

    /// Description of the task to delete
    #[arg(short, long, default_value = "")]
    description: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let session = Session::current()?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(args.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    let affected = Tasks::new()?.delete_matching(session.user_id, &args.title, &args.description)?;
    if affected == 0 {
        msg_warning!(Message::NoMatchingTasks(args.title));
    } else {
        msg_success!(Message::TasksDeletedCount(affected));
    }

    Ok(())
}
