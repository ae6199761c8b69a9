mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventdesk_core::{DateFilter, SortKey};
use tracing_subscriber::EnvFilter;

use crate::commands::Context;
use crate::utils::form::EventFields;

#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(about = "Manage your local event listings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events
    List {
        /// Only show events mentioning this text (name, venue, description, organizer)
        #[arg(short, long)]
        search: Option<String>,

        /// Which events to show: all, upcoming or past
        #[arg(short, long, default_value = "all")]
        when: DateFilter,

        /// Sort order: none, date-asc, date-desc or name-asc
        #[arg(long, default_value = "none")]
        sort: SortKey,

        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an event (prompts for anything not given)
    Add {
        #[command(flatten)]
        fields: EventFields,
    },
    /// Change fields of an existing event
    Edit {
        id: String,

        #[command(flatten)]
        fields: EventFields,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Copy an event under a new id
    Duplicate { id: String },
    /// Search interactively: each line typed replaces the search text
    Browse {
        #[arg(short, long, default_value = "all")]
        when: DateFilter,

        #[arg(long, default_value = "none")]
        sort: SortKey,
    },
    /// Show or change the color theme
    Theme {
        #[command(subcommand)]
        action: Option<commands::theme::ThemeAction>,
    },
    /// Create a local account and log in
    Register { username: String, email: String },
    /// Log in to a local account
    Login { username: String },
    /// Log out
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Show where data is stored and how much space it uses
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let ctx = Context::load()?;

    match cli.command {
        Commands::List {
            search,
            when,
            sort,
            json,
        } => commands::list::run(&ctx, search.unwrap_or_default(), when, sort, json),
        Commands::Add { fields } => commands::add::run(&ctx, fields),
        Commands::Edit { id, fields } => commands::edit::run(&ctx, &id, fields),
        Commands::Delete { id, yes } => commands::delete::run(&ctx, &id, yes),
        Commands::Duplicate { id } => commands::duplicate::run(&ctx, &id),
        Commands::Browse { when, sort } => commands::browse::run(&ctx, when, sort).await,
        Commands::Theme { action } => commands::theme::run(&ctx, action.unwrap_or_default()),
        Commands::Register { username, email } => {
            commands::account::register(&ctx, &username, &email)
        }
        Commands::Login { username } => commands::account::login(&ctx, &username),
        Commands::Logout => commands::account::logout(&ctx),
        Commands::Whoami => commands::account::whoami(&ctx),
        Commands::Info => commands::info::run(&ctx),
    }
}

/// Log to stderr, filtered by RUST_LOG (warnings only by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
