//! rWorklogger library root.
//! Exposes the CLI parser, the high-level run() function, and the work log
//! engines (accounting, weekly aggregation, projection) behind them.

pub mod cli;
pub mod clock;
pub mod config;
pub mod core;
pub mod errors;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None => commands::menu::handle(cli, cfg),
        Some(Commands::Init) => commands::init::handle(cli),
        Some(Commands::Start { .. } | Commands::End { .. } | Commands::Status) => {
            commands::session::handle(cli, cfg)
        }
        Some(Commands::Today | Commands::Week | Commands::All) => commands::view::handle(cli, cfg),
        Some(Commands::Edit { .. }) => commands::edit::handle(cli, cfg),
        Some(Commands::Del { .. }) => commands::del::handle(cli, cfg),
        Some(Commands::Lunch { .. }) => commands::lunch::handle(cli, cfg),
        Some(Commands::Config { .. }) => commands::config::handle(cli, cfg),
        Some(Commands::Backup { .. }) => commands::backup::handle(cli, cfg),
        Some(Commands::Export { .. }) => commands::export::handle(cli, cfg),
        Some(Commands::Log { .. }) => commands::log::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load();

    // 3️⃣ apply the store override from the command line
    if let Some(custom) = &cli.store {
        cfg.store = Config::resolve_store(custom).to_string_lossy().to_string();
    }

    // 4️⃣ diagnostics
    utils::logging::enable_logging(&cfg.log_level);
    tracing::debug!(store = %cfg.store, "configuration loaded");

    // 5️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
