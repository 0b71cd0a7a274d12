use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if matches!(cli.command, Some(Commands::Log { print: true })) {
        LogLogic::print_log(&cfg.store_path())?;
    }

    Ok(())
}
