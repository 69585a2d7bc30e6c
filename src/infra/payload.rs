//! Export request payloads.
//!
//! The export endpoint answers with one of four JSON shapes depending on
//! the requested scope: `{"note": ...}`, `{"cours": ...}`,
//! `{"classe": ...}` or `{"classes": [...]}`. This module turns such a
//! response into the exporter's input.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::{Class, Course, ExportDocument, Note, ScopeKind};

/// Errors while reading an export payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to read payload {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid export payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload has no {0} data")]
    MissingScope(ScopeKind),
}

/// A decoded export response.
///
/// Only the key matching the requested scope is normally present.
#[derive(Debug, Default, Deserialize)]
pub struct ExportPayload {
    #[serde(default)]
    pub note: Option<Note>,

    #[serde(default, rename = "cours")]
    pub course: Option<Course>,

    #[serde(default, rename = "classe")]
    pub class: Option<Class>,

    #[serde(default)]
    pub classes: Option<Vec<Class>>,
}

impl ExportPayload {
    /// Parses a payload from JSON text.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a payload file.
    pub fn read(path: &Path) -> Result<Self, PayloadError> {
        let json = std::fs::read_to_string(path).map_err(|source| PayloadError::Io {
            path: path.into(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Extracts the document for the requested scope.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError::MissingScope` if the payload carries no data
    /// for that scope.
    pub fn into_document(self, kind: ScopeKind) -> Result<ExportDocument, PayloadError> {
        let document = match kind {
            ScopeKind::Note => self.note.map(ExportDocument::Note),
            ScopeKind::Course => self.course.map(ExportDocument::Course),
            ScopeKind::Class => self.class.map(ExportDocument::Class),
            ScopeKind::All => self.classes.map(ExportDocument::Forest),
        };
        document.ok_or(PayloadError::MissingScope(kind))
    }

    /// Extracts whichever document is present, most specific first.
    pub fn into_inferred_document(self) -> Result<ExportDocument, PayloadError> {
        let kind = if self.note.is_some() {
            ScopeKind::Note
        } else if self.course.is_some() {
            ScopeKind::Course
        } else if self.class.is_some() {
            ScopeKind::Class
        } else {
            ScopeKind::All
        };
        self.into_document(kind)
    }
}
