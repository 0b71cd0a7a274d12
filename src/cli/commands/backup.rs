use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use std::io;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Some(Commands::Backup { file, compress }) = &cli.command {
        BackupLogic::backup(&cfg.store_path(), file, *compress, &mut io::stdin().lock())?;
    }

    Ok(())
}
