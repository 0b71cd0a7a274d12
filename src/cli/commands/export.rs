use crate::cli::commands::open_worklog;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use std::io;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Some(Commands::Export {
        format,
        file,
        force,
    }) = &cli.command
    {
        let worklog = open_worklog(cli, cfg)?;
        ExportLogic::export(
            worklog.store(),
            worklog.path(),
            *format,
            file,
            *force,
            &mut io::stdin().lock(),
        )?;
    }
    Ok(())
}
