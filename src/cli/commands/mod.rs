pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod log;
pub mod lunch;
pub mod menu;
pub mod session;
pub mod view;

use crate::cli::parser::Cli;
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::Config;
use crate::core::Worklog;
use crate::errors::AppResult;
use crate::utils::date::parse_datetime_arg;

/// Open the configured work log with the system clock, or with a pinned
/// clock when `--now` is given.
pub fn open_worklog(cli: &Cli, cfg: &Config) -> AppResult<Worklog> {
    let clock: Box<dyn Clock> = match &cli.now {
        Some(s) => Box::new(FixedClock(parse_datetime_arg(s)?)),
        None => Box::new(SystemClock),
    };

    Worklog::open(cfg.store_path(), clock)
}
