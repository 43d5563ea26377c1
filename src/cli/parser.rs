use crate::models::executable::ExecutableRef;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for farmevent
#[derive(Parser)]
#[command(
    name = "farmevent",
    version = env!("CARGO_PKG_VERSION"),
    about = "Schedule and edit farm events (sequences and regimens) for a farm-automation device",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the device timezone (IANA name, e.g. Europe/Rome)
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which executable a farm event should run. At most one may be given.
#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct ExecutableArgs {
    /// Run the sequence with this id
    #[arg(long = "sequence", value_name = "ID")]
    pub sequence: Option<i64>,

    /// Run the regimen with this id
    #[arg(long = "regimen", value_name = "ID")]
    pub regimen: Option<i64>,
}

impl ExecutableArgs {
    pub fn selected(&self) -> Option<ExecutableRef> {
        self.sequence
            .map(ExecutableRef::Sequence)
            .or(self.regimen.map(ExecutableRef::Regimen))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register a sequence or regimen
    Executable {
        /// sequence | regimen
        #[arg(long = "kind", short = 'k')]
        kind: String,

        /// Display name
        name: String,
    },

    /// List registered sequences and regimens
    Executables,

    /// Schedule a new farm event
    Add {
        #[command(flatten)]
        executable: ExecutableArgs,

        /// First run date (YYYY-MM-DD), device time
        #[arg(long = "start-date")]
        start_date: String,

        /// First run time (HH:MM), device time
        #[arg(long = "start-time")]
        start_time: String,

        /// Last run date (YYYY-MM-DD); requires --end-time
        #[arg(long = "end-date", requires = "end_time")]
        end_date: Option<String>,

        /// Last run time (HH:MM); requires --end-date
        #[arg(long = "end-time", requires = "end_date")]
        end_time: Option<String>,

        /// Repeat every N units (default from config)
        #[arg(long = "repeat")]
        repeat: Option<u32>,

        /// never | minutely | hourly | daily | weekly | monthly | yearly
        #[arg(long = "unit")]
        unit: Option<String>,
    },

    /// List farm events
    List,

    /// Show one farm event as an editable form with its next occurrences
    Show {
        id: i64,

        /// Print the view model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a farm event field by field
    Edit {
        id: i64,

        #[arg(long = "start-date")]
        start_date: Option<String>,

        #[arg(long = "start-time")]
        start_time: Option<String>,

        #[arg(long = "end-date")]
        end_date: Option<String>,

        #[arg(long = "end-time")]
        end_time: Option<String>,

        #[arg(long = "repeat")]
        repeat: Option<String>,

        #[arg(long = "unit")]
        unit: Option<String>,

        #[command(flatten)]
        executable: ExecutableArgs,

        /// Raw form field override (e.g. --set timeUnit=daily); repeatable
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Print the resulting patch without saving it
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Delete a farm event
    Del {
        id: i64,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Seed the device configuration with a hardware profile
    Seed {
        /// none | genesis_1.5
        profile: String,
    },

    /// List seeded tool slots
    Tools,
}
