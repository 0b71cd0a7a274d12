use crate::cli::commands::menu::prompt_lunch;
use crate::cli::commands::open_worklog;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::lunch::{parse_minutes, preset};
use crate::errors::{AppError, AppResult};
use crate::ui::render;
use std::io;

/// Set the lunch break from `--preset`/`--minutes`, or through the
/// interactive lunch menu when neither is given.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Some(Commands::Lunch { preset: p, minutes }) = &cli.command {
        let mut worklog = open_worklog(cli, cfg)?;

        let chosen = match (p, minutes) {
            (Some(n), _) => Some(
                preset(usize::from(*n))
                    .ok_or_else(|| AppError::InvalidLunchDuration(format!("preset {}", n)))?,
            ),
            (None, Some(raw)) => Some(parse_minutes(raw)?),
            (None, None) => None,
        };

        match chosen {
            Some(m) => render::lunch(&worklog.configure_lunch(m)?),
            None => prompt_lunch(&mut worklog, &mut io::stdin().lock())?,
        }
    }

    Ok(())
}
