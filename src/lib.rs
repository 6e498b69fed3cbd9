//! rTimeclock library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod reporting;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // `--as` wins over the configured default user
    let actor = cli.as_user.as_deref().or(cfg.default_user.as_deref());

    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } | Commands::Log { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Clock { .. } => commands::clock::handle(&cli.command, cfg, actor),
        Commands::Status { .. } => commands::status::handle(&cli.command, cfg, actor),
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg, actor),
        Commands::Track { .. } => commands::track::handle(&cli.command, cfg, actor),
        Commands::Shifts { .. } => commands::shifts::handle(&cli.command, cfg, actor),
        Commands::Projects | Commands::Users => commands::list::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg, actor),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
