use super::value_enum::CliTemplate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "textfile",
    version = crate::VERSION,
    about = "Simple text file tool: create, edit, view and inspect text files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new text file
    Create {
        /// File path
        file: PathBuf,
        /// Template to use
        #[arg(short, long, value_enum, default_value_t = CliTemplate::Blank)]
        template: CliTemplate,
    },
    /// Edit a text file
    Edit {
        /// File path
        file: PathBuf,
    },
    /// View a text file
    View {
        /// File path
        file: PathBuf,
        /// Show line numbers
        #[arg(short = 'n', long)]
        line_numbers: bool,
    },
    /// Get information about a text file
    Info {
        /// File path
        file: PathBuf,
    },
}
