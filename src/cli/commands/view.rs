use crate::cli::commands::open_worklog;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render;

/// `today`, `week` and `all`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let worklog = open_worklog(cli, cfg)?;

    match &cli.command {
        Some(Commands::Today) => render::today(&worklog.view_today()),
        Some(Commands::Week) => render::week(&worklog.view_week()),
        Some(Commands::All) => render::all(&worklog.view_all()),
        _ => {}
    }

    Ok(())
}
