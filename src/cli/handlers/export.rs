//! Handler for the `export` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::cli::ExportArgs;
use crate::cli::config::Config;
use crate::cli::output::print_result;
use crate::domain::{ExportDocument, ExportOptions, ExportScope};
use crate::export::{ExportFiles, MarkdownExporter};
use crate::infra::{ExportPayload, write_file, write_files};
use crate::store::{ExportRepository, SqliteStore};

/// Result of an export operation.
#[derive(Debug, Serialize)]
pub struct ExportResult {
    /// What was exported: note, course, class or all
    pub scope: String,
    /// Number of files produced
    pub files_exported: usize,
    /// Written paths (empty when printed to stdout)
    pub paths: Vec<String>,
}

/// Where an export ended up.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Emitted {
    /// Content of a single file, to be printed
    Stdout(String),
    /// Paths written to disk
    Written(Vec<PathBuf>),
}

/// Handle the `export` command.
pub fn handle_export(args: &ExportArgs, db_path: &Path, config: &Config) -> Result<()> {
    let scope = ExportScope::from_query(
        args.note.as_deref(),
        args.course.as_deref(),
        args.class.as_deref(),
    );
    let document = load_document(args, &scope, db_path, config)?;
    let exporter = MarkdownExporter::new(resolve_options(args, &config.export));
    let files = exporter.export(&document);

    if files.is_empty() {
        bail!("Nothing to export");
    }

    let paths = match emit(&files, args.output.as_deref(), config)? {
        Emitted::Stdout(content) => {
            print!("{content}");
            return Ok(());
        }
        Emitted::Written(paths) => paths,
    };

    let paths: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    let message = match paths.as_slice() {
        [single] => format!("Exported {} to {}", document.kind(), single),
        _ => format!("Exported {} files", paths.len()),
    };
    let result = ExportResult {
        scope: document.kind().to_string(),
        files_exported: paths.len(),
        paths: paths.clone(),
    };
    print_result(args.cli_format, result, &paths, &message)
}

/// Merges command-line flags over the configured defaults.
///
/// Each option has an on and an off flag; without either the configured
/// value is kept.
pub(crate) fn resolve_options(args: &ExportArgs, defaults: &ExportOptions) -> ExportOptions {
    ExportOptions {
        include_metadata: switch(args.metadata, args.no_metadata, defaults.include_metadata),
        include_table_of_contents: switch(args.toc, args.no_toc, defaults.include_table_of_contents),
        date_format: args.date_format.unwrap_or(defaults.date_format),
        separate_files: switch(args.separate_files, args.single_file, defaults.separate_files),
    }
}

fn switch(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

/// Loads the document to export from a payload file or the store.
fn load_document(
    args: &ExportArgs,
    scope: &ExportScope,
    db_path: &Path,
    config: &Config,
) -> Result<ExportDocument> {
    if let Some(input) = &args.input {
        let payload = ExportPayload::read(input)?;
        let document = if args.has_scope() {
            payload.into_document(scope.kind())?
        } else {
            payload.into_inferred_document()?
        };
        return Ok(document);
    }

    let user = config
        .user(args.user.as_deref())
        .context("no user given: pass --user or set `user` in the config file")?;
    let store = SqliteStore::open(db_path)
        .with_context(|| format!("failed to open store: {}", db_path.display()))?;
    Ok(store.load_document(&user, scope)?)
}

/// Sends export files to stdout, a single file, or a directory.
///
/// A single file goes to stdout when no output is given, or to `output`
/// itself when it names a `.md` file. Anything else is written into the
/// `output` directory.
pub(crate) fn emit(files: &ExportFiles, output: Option<&Path>, config: &Config) -> Result<Emitted> {
    let Some(output) = output else {
        return match files.first() {
            Some((_, content)) if files.len() == 1 => Ok(Emitted::Stdout(content.to_string())),
            _ => bail!(
                "Export produced {} files: use --output to choose a directory",
                files.len()
            ),
        };
    };

    if files.len() == 1
        && is_markdown_file(output)
        && let Some((_, content)) = files.first()
    {
        write_file(output, content)?;
        return Ok(Emitted::Written(vec![output.to_path_buf()]));
    }

    Ok(Emitted::Written(write_files(files, output, config.stagger())?))
}

fn is_markdown_file(path: &Path) -> bool {
    !path.is_dir()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}
