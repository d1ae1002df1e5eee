use crate::db::users::Users;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Password};

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Username for the new account
    #[arg(required = true)]
    username: String,

    /// Password for the new account; prompted interactively when omitted
    #[arg(short, long)]
    password: Option<String>,
}

pub fn cmd(args: RegisterArgs) -> Result<()> {
    if args.username.trim().is_empty() {
        msg_bail_anyhow!(Message::UsernameRequired);
    }

    let password = match args.password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPassword.to_string())
            .with_confirmation(Message::PromptPasswordConfirm.to_string(), Message::PasswordMismatch.to_string())
            .interact()?,
    };
    if password.is_empty() {
        msg_bail_anyhow!(Message::PasswordRequired);
    }

    Users::new()?.register(&args.username, &password)?;
    msg_success!(Message::UserRegistered(args.username));

    Ok(())
}
