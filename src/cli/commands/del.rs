use crate::cli::commands::open_worklog;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;
use crate::utils::date::format_date;
use std::io;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Some(Commands::Del { date, yes }) = &cli.command {
        let mut worklog = open_worklog(cli, cfg)?;

        //
        // The date must exist before asking anything
        //
        let d = worklog.existing_date(date)?;

        //
        // Confirmation prompt
        //
        if !*yes
            && !confirm(
                &mut io::stdin().lock(),
                &format!("Are you sure you want to delete the entry for {}?", format_date(d)),
            )?
        {
            info("Deletion cancelled.");
            return Ok(());
        }

        worklog.delete_day(date)?;
        success(format!("Entry for {} deleted.", format_date(d)));
    }

    Ok(())
}
