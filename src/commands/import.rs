use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::transfer::Importer;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file to import tasks from
    #[arg(required = true)]
    file: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let session = Session::current()?;

    let count = Importer::new(args.file.clone()).import(session.user_id)?;
    msg_success!(Message::ImportCompleted(count, args.file.display().to_string()));

    Ok(())
}
