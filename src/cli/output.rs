//! Output format types for CLI commands.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain file paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Prints a command result in the requested format.
///
/// `paths` is what the `paths` format prints, one per line.
pub fn print_result<T: Serialize>(
    format: OutputFormat,
    data: T,
    paths: &[String],
    human_message: &str,
) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{human_message}"),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(data))?);
        }
        OutputFormat::Paths => {
            for path in paths {
                println!("{path}");
            }
        }
    }
    Ok(())
}
