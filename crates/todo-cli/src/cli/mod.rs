//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use todo_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "todos")]
#[command(version)]
#[command(about = "Manage your todo-lists from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Check whether the current session is logged in
    Whoami,

    /// Log in with email and password
    Login {
        /// Account email (defaults to [account].email or TODOS_EMAIL)
        #[arg(long)]
        email: Option<String>,
        /// Account password (defaults to [account].password or TODOS_PASSWORD)
        #[arg(long)]
        password: Option<String>,
        /// Ask the server to keep the session
        #[arg(long)]
        remember_me: bool,
    },

    /// Log out of the current session
    Logout,

    /// List todo-lists
    Lists {
        /// Print the lists as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a todo-list
    Add {
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Delete a todo-list
    Rm {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Rename a todo-list
    Rename {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "TITLE")]
        title: String,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Print a fresh config rendered from defaults
    Generate,
    /// Show the effective settings (env overrides applied)
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;
    logging::init(&config.log_level);

    match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
            ConfigCommands::Show => commands::config::show(&config),
        },

        Commands::Whoami => commands::auth::whoami(&config).await,
        Commands::Login {
            email,
            password,
            remember_me,
        } => {
            let params = commands::auth::login_params(&config, email, password, remember_me)?;
            commands::auth::login(&config, &params).await
        }
        Commands::Logout => commands::auth::logout(&config).await,

        Commands::Lists { json } => commands::todolists::list(&config, json).await,
        Commands::Add { title } => commands::todolists::add(&config, &title).await,
        Commands::Rm { id } => commands::todolists::remove(&config, &id).await,
        Commands::Rename { id, title } => commands::todolists::rename(&config, &id, &title).await,
    }
}
