use crate::core::group::GroupBy;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rotaview
#[derive(Parser)]
#[command(
    name = "rotaview",
    version = env!("CARGO_PKG_VERSION"),
    about = "Derive shift attendance status, progress blocks and calendar groupings from rota snapshots",
    long_about = None
)]
pub struct Cli {
    /// Override the snapshot directory (useful for tests or ad-hoc snapshots)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Evaluate as of this local time (YYYY-MM-DDTHH:MM) instead of now
    #[arg(global = true, long = "now")]
    pub now: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and snapshot directory
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Show the attendance status of each shift
    Status {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or start:end)"
        )]
        period: Option<String>,

        #[arg(long = "hr-id", help = "Only this employee")]
        hr_id: Option<i64>,
    },

    /// Show worked/lateness time blocks and utilisation of each shift
    Progress {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "hr-id", help = "Only this employee")]
        hr_id: Option<i64>,

        #[arg(long = "width", default_value_t = 40, help = "Progress bar width in characters")]
        width: usize,
    },

    /// Show shifts grouped by date and time window (or another key)
    Calendar {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "hr-id", help = "Only this employee")]
        hr_id: Option<i64>,

        #[arg(long = "merge", help = "Merge time windows nested inside wider ones")]
        merge: bool,

        #[arg(long = "group-by", value_enum, default_value = "time")]
        group_by: GroupBy,

        #[arg(
            long = "filter",
            value_name = "NAME=V1,V2",
            help = "Keep shifts matching any value (status, location, category, job); repeatable"
        )]
        filters: Vec<String>,

        #[arg(long = "search", help = "Case-insensitive search on agent, location and category")]
        search: Option<String>,
    },

    /// Export the status report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long = "hr-id", help = "Only this employee")]
        hr_id: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
