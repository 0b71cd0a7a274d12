use crate::cli::commands::open_worklog;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render;

/// Edit or create the times of a day.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Some(Commands::Edit { date, start, end }) = &cli.command {
        let mut worklog = open_worklog(cli, cfg)?;
        let outcome = worklog.edit_day(date, start.as_deref(), end.as_deref())?;
        render::edit(&outcome);
    }

    Ok(())
}
