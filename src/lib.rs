//! notra - Markdown export of classes, courses and notes

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;
pub mod store;

use anyhow::{Result, anyhow};
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_export, handle_import},
};
use infra::logging::init_tracing;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose).map_err(|e| anyhow!(e))?;

    let config = Config::load()?;
    let db_path = config.db_path(cli.db.as_ref());

    match &cli.command {
        Command::Export(args) => handle_export(args, &db_path, &config),
        Command::Import(args) => handle_import(args, &db_path, &config),
        Command::Completions(args) => handle_completions(args),
    }
}
