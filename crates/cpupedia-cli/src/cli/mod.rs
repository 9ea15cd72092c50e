//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use cpupedia_core::content::ContentStore;

mod commands;

#[derive(Parser)]
#[command(name = "cpupedia")]
#[command(version)]
#[command(about = "Terminal CPU encyclopedia")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Search topics without opening the UI
    Search {
        /// Case-insensitive substring matched against title and text
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Inspect encyclopedia topics
    Topics {
        #[command(subcommand)]
        command: TopicCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum TopicCommands {
    /// Lists all topics
    List,
    /// Shows a specific topic
    Show {
        /// The ID of the topic to show
        #[arg(value_name = "TOPIC_ID")]
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = crate::logging::init().context("init logging")?;
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "cpupedia starting");

    let store = ContentStore::builtin();

    // default to the full-screen UI
    let Some(command) = cli.command else {
        return run_tui(store);
    };

    match command {
        Commands::Search { query } => commands::search::run(&query, &store),
        Commands::Topics { command } => match command {
            TopicCommands::List => commands::topics::list(&store),
            TopicCommands::Show { id } => commands::topics::show(&id, &store),
        },
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

#[cfg(feature = "tui")]
fn run_tui(store: ContentStore) -> Result<()> {
    let config = cpupedia_core::config::Config::load().context("load config")?;
    cpupedia_tui::run(&config, store)
}

#[cfg(not(feature = "tui"))]
fn run_tui(_store: ContentStore) -> Result<()> {
    anyhow::bail!("This build has no UI. Use `cpupedia search <query>`.")
}
