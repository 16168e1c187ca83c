use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tongue::error::{Result, TongueError};

#[derive(Parser, Debug)]
#[command(name = "tongue", bin_name = "tongue", version)]
#[command(about = "A cli vocabulary manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON file holding the vocabulary [default: collection.json]
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Don't display native words
    #[arg(long, global = true, help_heading = "Options")]
    pub no_native: bool,

    /// Don't display foreign words
    #[arg(long, global = true, help_heading = "Options")]
    pub no_foreign: bool,

    /// Display additional messages
    #[arg(short = 'm', long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new entry. First argument is the native, second the foreign word
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Word in your native language
        native: Option<String>,

        /// Word in the language you are learning
        foreign: Option<String>,

        /// Extra words are ignored
        #[arg(hide = true)]
        rest: Vec<String>,
    },

    /// Delete the first entry whose native word matches
    #[command(alias = "d", display_order = 2)]
    Delete {
        /// Native word of the entry to delete
        native: Option<String>,

        /// Extra words are ignored
        #[arg(hide = true)]
        rest: Vec<String>,
    },

    /// List all entries
    #[command(alias = "l", display_order = 3)]
    List {
        /// Leave out the "N: " index prefix
        #[arg(long)]
        no_index: bool,
    },

    /// Display an entry (a random one unless a selector is given)
    #[command(alias = "s", display_order = 4)]
    Show {
        /// Display the entry with this index (starting at 1)
        #[arg(short, long, allow_negative_numbers = true)]
        index: Option<i64>,

        /// Display the foreign word(s) of entries with this native word
        #[arg(short, long)]
        native: Option<String>,

        /// Display the native word(s) of entries with this foreign word
        #[arg(short, long)]
        foreign: Option<String>,
    },
}

/// Parses the command line.
///
/// Help and version requests print and exit as clap does. Any other parse
/// failure (bad value, unknown flag) comes back as [`TongueError::Usage`]
/// carrying clap's message, so it is shown as guidance rather than exiting 2.
pub fn parse_cli<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
        _ => TongueError::Usage(e.to_string().trim_end().to_string()),
    })
}
