use crate::cli::commands::open_worklog;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::render;

/// `start`, `end` and `status`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut worklog = open_worklog(cli, cfg)?;

    match &cli.command {
        Some(Commands::Start { at }) => {
            let outcome = worklog.log_start(at.as_deref())?;
            render::start(&outcome);
        }
        Some(Commands::End { at }) => {
            let outcome = worklog.log_end(at.as_deref())?;
            render::end(&outcome);
        }
        Some(Commands::Status) => match worklog.session() {
            Some(p) => render::session(&p),
            None => info("No active work session today."),
        },
        _ => {}
    }

    Ok(())
}
