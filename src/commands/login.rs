use crate::db::users::Users;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username to log in as
    #[arg(required = true)]
    username: String,

    /// Password; prompted interactively when omitted
    #[arg(short, long)]
    password: Option<String>,
}

pub fn cmd(args: LoginArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPassword.to_string())
            .interact()?,
    };

    let user = match Users::new()?.verify(&args.username, &password)? {
        Some(user) => user,
        None => msg_bail_anyhow!(Message::InvalidCredentials),
    };

    let session = Session::open(&user)?;
    msg_success!(Message::LoggedIn(session.username));

    Ok(())
}
