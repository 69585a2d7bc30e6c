//! Handler for the `import` command.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::ImportArgs;
use crate::cli::config::Config;
use crate::cli::output::print_result;
use crate::infra::ExportPayload;
use crate::store::{ImportSummary, SqliteStore};

/// Result of an import operation.
#[derive(Debug, Serialize)]
pub struct ImportResult {
    pub user: String,
    pub classes: usize,
    pub courses: usize,
    pub notes: usize,
}

/// Handle the `import` command.
pub fn handle_import(args: &ImportArgs, db_path: &Path, config: &Config) -> Result<()> {
    let user = config
        .user(args.user.as_deref())
        .context("no user given: pass --user or set `user` in the config file")?;
    let summary = import_payload(&args.file, db_path, &user)?;

    let message = format!(
        "Imported {} classes, {} courses, {} notes for {}",
        summary.classes, summary.courses, summary.notes, user
    );
    let result = ImportResult {
        user,
        classes: summary.classes,
        courses: summary.courses,
        notes: summary.notes,
    };
    print_result(args.cli_format, result, &[db_path.display().to_string()], &message)
}

/// Reads the `classes` array of a payload file into the store.
pub(crate) fn import_payload(file: &Path, db_path: &Path, user: &str) -> Result<ImportSummary> {
    let payload = ExportPayload::read(file)?;
    let classes = payload
        .classes
        .with_context(|| format!("{} has no \"classes\" array", file.display()))?;

    let mut store = SqliteStore::open(db_path)
        .with_context(|| format!("failed to open store: {}", db_path.display()))?;
    Ok(store.import_forest(user, &classes)?)
}
