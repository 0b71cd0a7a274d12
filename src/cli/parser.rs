use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorklogger
#[derive(Parser)]
#[command(
    name = "rworklogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log work start/end times, deduct lunch breaks and track the 7h day / 35h week",
    long_about = "Run without a subcommand to open the interactive menu."
)]
pub struct Cli {
    /// Override the work log path (useful for tests or a custom store)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin the clock to "YYYY-MM-DD HH:MM"
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty work log
    Init,

    /// Log today's workday start
    Start {
        #[arg(long = "at", help = "Start time (HH:MM), defaults to now")]
        at: Option<String>,
    },

    /// Log today's workday end
    End {
        #[arg(long = "at", help = "End time (HH:MM), defaults to now")]
        at: Option<String>,
    },

    /// Show the running session counter and target projections
    Status,

    /// View today's log
    Today,

    /// View this week's log
    Week,

    /// View all logs grouped by week
    All,

    /// Edit (or create) the times of a day
    Edit {
        /// Date to edit (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "New start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "New end time (HH:MM)")]
        end: Option<String>,
    },

    /// Delete the entry of a day
    Del {
        /// Date to delete (YYYY-MM-DD)
        date: String,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Configure the lunch break (recalculates every complete day)
    Lunch {
        #[arg(
            long,
            conflicts_with = "minutes",
            value_parser = clap::value_parser!(u8).range(1..=5),
            help = "Preset: 1=none, 2=15m, 3=30m, 4=45m, 5=60m"
        )]
        preset: Option<u8>,

        #[arg(long, help = "Custom duration in minutes (0-120)")]
        minutes: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Create a backup copy of the work log
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export the work log entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print the internal log")]
        print: bool,
    },
}
