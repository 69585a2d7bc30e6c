//! Command handlers for the CLI.

mod completions;
mod export;
mod import;

pub use completions::handle_completions;
pub use export::{ExportResult, handle_export};
pub use import::{ImportResult, handle_import};
