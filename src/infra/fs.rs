//! Writing exported Markdown to disk with atomic writes.

use crate::export::ExportFiles;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors while emitting exported files.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl FsError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Writes one Markdown file.
///
/// Uses a temporary file and atomic rename, so a reader never observes a
/// partially written export. The parent directory must exist.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the atomic rename fails.
pub fn write_file(path: &Path, content: &str) -> Result<(), FsError> {
    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Err(FsError::ParentNotFound { path: path.into() }),
    };

    if !parent.exists() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(path, e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| FsError::from_io(path, e))?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote export file");
    Ok(())
}

/// Writes every exported file into `dir`, in export order.
///
/// Creates the directory if needed. When `stagger` is non-zero, waits that
/// long between consecutive files (not before the first).
///
/// Returns the written paths.
///
/// # Errors
///
/// Returns `FsError::NotADirectory` if `dir` exists and is not a directory.
/// Stops at the first failed write; files already written are kept.
pub fn write_files(
    files: &ExportFiles,
    dir: &Path,
    stagger: Duration,
) -> Result<Vec<PathBuf>, FsError> {
    if dir.exists() && !dir.is_dir() {
        return Err(FsError::NotADirectory { path: dir.into() });
    }
    std::fs::create_dir_all(dir).map_err(|e| FsError::from_io(dir, e))?;

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files.iter() {
        if !written.is_empty() && !stagger.is_zero() {
            thread::sleep(stagger);
        }
        let path = dir.join(name);
        write_file(&path, content)?;
        written.push(path);
    }

    tracing::debug!(dir = %dir.display(), count = written.len(), "emitted export files");
    Ok(written)
}
