use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod filter;
pub mod import;
pub mod list;
pub mod login;
pub mod logout;
pub mod register;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Register a new user")]
    Register(register::RegisterArgs),
    #[command(about = "Log in and start a session")]
    Login(login::LoginArgs),
    #[command(about = "End the current session")]
    Logout,
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "List your tasks")]
    List,
    #[command(about = "Edit a task located by title and description")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task located by title and description")]
    Delete(delete::DeleteArgs),
    #[command(about = "Filter tasks by text, priority and deadline range")]
    Filter(filter::FilterArgs),
    #[command(about = "Import tasks from a CSV file")]
    Import(import::ImportArgs),
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Register(args) => register::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Logout => logout::cmd(),
            Commands::Add(args) => add::cmd(args),
            Commands::List => list::cmd(),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Filter(args) => filter::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
