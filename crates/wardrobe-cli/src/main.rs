//! Command line interface for the wardrobe outfit engine.
//!
//! With a subcommand the binary runs it and exits; without one it drops
//! into the interactive menu.

mod commands;
mod menu;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wardrobe_core::config::EngineConfig;
use wardrobe_storage::WardrobeDb;

#[derive(Parser, Debug)]
#[command(
    name = "wardrobe",
    about = "Wardrobe manager and outfit recommendation engine",
    version
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "wardrobe.toml")]
    config: PathBuf,
    /// Override the configured database path
    #[arg(long)]
    database: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a garment to the wardrobe
    Add(commands::AddArgs),
    /// List garments
    List {
        /// Include deactivated garments
        #[arg(long)]
        all: bool,
    },
    /// Show one garment in full
    Show { id: i64 },
    /// Update individual fields of a garment
    Edit(commands::EditArgs),
    /// Mark a garment active again
    Activate { id: i64 },
    /// Take a garment out of rotation without deleting it
    Deactivate { id: i64 },
    /// Delete a garment permanently
    Remove { id: i64 },
    /// Generate outfit suggestions
    Suggest(commands::SuggestArgs),
    /// Record a verdict on a previously suggested outfit
    Feedback(commands::FeedbackArgs),
    /// Inspect or reset the learned scoring weights
    Weights {
        #[command(subcommand)]
        command: commands::WeightsCommand,
    },
    /// Show the feedback history, newest first
    History {
        /// Maximum number of records to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = EngineConfig::load(&cli.config)
        .with_context(|| format!("loading config '{}'", cli.config.display()))?;
    init_tracing(&config.log_level);

    let db_path = cli
        .database
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.database_path));
    let db = WardrobeDb::open(&db_path)
        .with_context(|| format!("opening database '{}'", db_path.display()))?;
    tracing::debug!(database = %db_path.display(), "store ready");

    match cli.command {
        Some(Command::Add(args)) => commands::add(&db, &args),
        Some(Command::List { all }) => commands::list(&db, all),
        Some(Command::Show { id }) => commands::show(&db, id),
        Some(Command::Edit(args)) => commands::edit(&db, &args),
        Some(Command::Activate { id }) => commands::set_active(&db, id, true),
        Some(Command::Deactivate { id }) => commands::set_active(&db, id, false),
        Some(Command::Remove { id }) => commands::remove(&db, id),
        Some(Command::Suggest(args)) => commands::suggest(&db, &config, &args),
        Some(Command::Feedback(args)) => commands::feedback(&db, &args),
        Some(Command::Weights { command }) => commands::weights(&db, &command),
        Some(Command::History { limit }) => commands::history(&db, limit),
        None => menu::run(&db, &config),
    }
}
