//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::DateFormat;
use output::OutputFormat;

/// notra - export classes, courses and notes to Markdown
#[derive(Parser, Debug)]
#[command(name = "notra", version, about, long_about = None)]
pub struct Cli {
    /// Path to the notes store (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export a note, course, class or everything to Markdown
    Export(ExportArgs),

    /// Import classes from a JSON export payload into the store
    Import(ImportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `export` command
///
/// With no scope flag the whole forest is exported. When several are
/// given the most specific wins: note, then course, then class.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Export a single note by ID
    #[arg(long)]
    pub note: Option<String>,

    /// Export a course by ID
    #[arg(long)]
    pub course: Option<String>,

    /// Export a class by ID
    #[arg(long)]
    pub class: Option<String>,

    /// Owner of the exported data (overrides config file)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Read data from a JSON payload instead of the store
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Include creation and modification dates (overrides config file)
    #[arg(long, overrides_with = "no_metadata")]
    pub metadata: bool,

    /// Omit creation and modification dates
    #[arg(long, overrides_with = "metadata")]
    pub no_metadata: bool,

    /// Include the table of contents (overrides config file)
    #[arg(long, overrides_with = "no_toc")]
    pub toc: bool,

    /// Omit the table of contents
    #[arg(long, overrides_with = "toc")]
    pub no_toc: bool,

    /// Date format: iso, french or us
    #[arg(long)]
    pub date_format: Option<DateFormat>,

    /// When exporting everything, write one file per note, per course and
    /// per class
    #[arg(long, overrides_with = "single_file")]
    pub separate_files: bool,

    /// When exporting everything, write a single document (overrides config file)
    #[arg(long, overrides_with = "separate_files")]
    pub single_file: bool,

    /// Output file (.md) or directory (stdout if not specified for a single file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Format of the command's own report
    #[arg(long = "cli-format", value_enum, default_value_t = OutputFormat::Human)]
    pub cli_format: OutputFormat,
}

impl ExportArgs {
    /// Returns true if any scope flag was given.
    pub fn has_scope(&self) -> bool {
        self.note.is_some() || self.course.is_some() || self.class.is_some()
    }
}

/// Arguments for the `import` command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// JSON payload with a `classes` array
    pub file: PathBuf,

    /// Owner of the imported data (overrides config file)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Format of the command's own report
    #[arg(long = "cli-format", value_enum, default_value_t = OutputFormat::Human)]
    pub cli_format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
