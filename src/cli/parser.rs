use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for campus360
#[derive(Parser)]
#[command(
    name = "campus360",
    version = env!("CARGO_PKG_VERSION"),
    about = "Campus portal helpers: attendance scans with a late/present cutoff, notes and CSV export",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Record an attendance scan (Present until the cutoff, Late after it)
    Scan {
        /// Scan method label, e.g. "QR" or "Face Scan"
        #[arg(long, short)]
        mode: Option<String>,

        /// Pretend the scan happens today at HH:MM[:SS] local time
        #[arg(long, value_name = "TIME")]
        at: Option<String>,
    },

    /// Print the attendance log, newest first
    Log {
        /// Print the stored JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Show at most N entries
        #[arg(long, short = 'n', value_name = "N")]
        limit: Option<usize>,
    },

    /// Clear the attendance log
    Clear {
        /// Clear every stored value (log, notes, ...)
        #[arg(long)]
        all: bool,

        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the attendance log
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Save, show or delete a note
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Print today's date and the current time
    Today,
}

#[derive(Subcommand)]
pub enum NoteAction {
    /// Save TEXT under note ID (replaces any previous text)
    Save { id: String, text: String },

    /// Print the note saved under ID
    Show { id: String },

    /// Delete the note saved under ID
    Del { id: String },
}
