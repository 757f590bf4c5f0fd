//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Kinship CLI - Explore the family graph of a genealogical record.
#[derive(Debug, Parser)]
#[command(name = "kinship")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KINSHIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Chart id used to scope family ids
    #[arg(long, global = true)]
    pub chart_id: Option<String>,

    /// Fail on relationships that name unknown persons
    #[arg(long, global = true)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show graph statistics
    Summary(FileArgs),

    /// List persons
    Persons(FileArgs),

    /// List families
    Families(FileArgs),

    /// Show one person with their families and relatives
    Person(PersonArgs),

    /// Enter interactive REPL mode
    Repl(FileArgs),
}

/// Arguments for commands that only need a record.
#[derive(Debug, Parser)]
pub struct FileArgs {
    /// Record file (GEDCOM X JSON)
    pub file: PathBuf,
}

/// Arguments for the person command.
#[derive(Debug, Parser)]
pub struct PersonArgs {
    /// Record file (GEDCOM X JSON)
    pub file: PathBuf,

    /// Person id
    pub id: String,
}

impl Command {
    /// Record file the command reads.
    pub fn file(&self) -> &PathBuf {
        match self {
            Command::Summary(args) | Command::Persons(args) | Command::Families(args) | Command::Repl(args) => {
                &args.file
            }
            Command::Person(args) => &args.file,
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
