//! eventquery library root.
//! Exposes the query pipeline (core), its collaborators (db, llm), the
//! host-facing actions, the CLI parser and the high-level run() function.

pub mod actions;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod llm;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Ask { .. } => cli::commands::ask::handle(&cli.command, cfg),
        Commands::Sql { .. } => cli::commands::sql::handle(&cli.command, cfg),
        Commands::Info { .. } => cli::commands::info::handle(&cli.command, cfg),
        Commands::Webhook { .. } => cli::commands::webhook::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    utils::logging::init_tracing(cli.verbose);

    // Loaded once; read-only from here on.
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
