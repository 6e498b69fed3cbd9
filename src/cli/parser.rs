use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeclock
/// CLI application to clock in/out and track work with SQLite
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A team time clock: clock in/out, track tasks against projects and export shifts using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Act as this user (Slack id); defaults to `default_user` from the config
    #[arg(global = true, long = "as", value_name = "SLACK_ID")]
    pub as_user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Create any missing table")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Clock in or out (in/back, out/leave/break/lunch)
    Clock {
        /// What to do: in, back, out, leave, break or lunch
        action: String,
    },

    /// Show current status and hours worked today
    Status {
        #[arg(long, value_name = "SLACK_ID", help = "Show another user's status")]
        user: Option<String>,
    },

    /// Register a user or a project (administrators only)
    Add {
        #[command(subcommand)]
        target: AddTarget,
    },

    /// Track time spent on a project
    Track {
        /// Project code (case-insensitive)
        code: Option<String>,

        #[arg(long, help = "Project id, instead of the code")]
        project: Option<i64>,

        #[arg(long, short = 'd', help = "Short description")]
        description: Option<String>,

        #[arg(long, short = 't', value_name = "HH:MM", help = "Time spent")]
        time: Option<String>,

        #[arg(long, help = "Ticket number")]
        ticket: Option<String>,
    },

    /// List reconstructed shifts
    Shifts {
        #[arg(long, value_name = "SLACK_ID", help = "Show another user's shifts")]
        user: Option<String>,

        #[arg(long, conflicts_with = "user", help = "Show every user's shifts")]
        all: bool,

        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end)"
        )]
        range: Option<String>,
    },

    /// List registered projects
    Projects,

    /// List registered users
    Users,

    /// Export shifts or tracked tasks (administrators only)
    Export {
        #[arg(long, conflicts_with = "tasks", help = "Export reconstructed shifts (default)")]
        shifts: bool,

        #[arg(long, help = "Export tracked tasks")]
        tasks: bool,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, value_name = "SLACK_ID", help = "Export a single user")]
        user: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum AddTarget {
    /// Register a user
    User {
        #[arg(long = "slack-id", value_name = "SLACK_ID")]
        slack_id: String,

        #[arg(long)]
        name: String,

        #[arg(long, help = "Grant administrator rights")]
        admin: bool,
    },

    /// Register a project
    Project {
        #[arg(long)]
        name: String,

        #[arg(long, help = "Short project code (stored upper-case)")]
        code: String,
    },
}
