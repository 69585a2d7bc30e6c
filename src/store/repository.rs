//! ExportRepository trait and error types.

use crate::domain::{Class, Course, ExportDocument, ExportScope, Note, ScopeKind};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading export data.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested record does not exist or belongs to another user.
    #[error("{kind} not found: {id}")]
    NotFound { kind: ScopeKind, id: String },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored timestamp could not be parsed.
    #[error("invalid timestamp '{value}' in {table}")]
    InvalidTimestamp { table: &'static str, value: String },

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to a user's forest, shaped for export.
///
/// Every query is scoped to `user_id`: records owned by another user are
/// reported as absent. Children are returned in creation order.
pub trait ExportRepository {
    /// Returns a note if it belongs to one of the user's courses.
    fn find_note(&self, user_id: &str, note_id: &str) -> StoreResult<Option<Note>>;

    /// Returns a course with its notes.
    fn find_course(&self, user_id: &str, course_id: &str) -> StoreResult<Option<Course>>;

    /// Returns a class with its courses and their notes.
    fn find_class(&self, user_id: &str, class_id: &str) -> StoreResult<Option<Class>>;

    /// Returns all of the user's classes with their full subtrees.
    fn list_classes(&self, user_id: &str) -> StoreResult<Vec<Class>>;

    /// Loads the document targeted by `scope`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when the targeted record is missing.
    fn load_document(&self, user_id: &str, scope: &ExportScope) -> StoreResult<ExportDocument> {
        let not_found = |kind: ScopeKind, id: &str| StoreError::NotFound {
            kind,
            id: id.to_string(),
        };

        let document = match scope {
            ExportScope::Note(id) => self
                .find_note(user_id, id)?
                .map(ExportDocument::Note)
                .ok_or_else(|| not_found(ScopeKind::Note, id))?,
            ExportScope::Course(id) => self
                .find_course(user_id, id)?
                .map(ExportDocument::Course)
                .ok_or_else(|| not_found(ScopeKind::Course, id))?,
            ExportScope::Class(id) => self
                .find_class(user_id, id)?
                .map(ExportDocument::Class)
                .ok_or_else(|| not_found(ScopeKind::Class, id))?,
            ExportScope::All => ExportDocument::Forest(self.list_classes(user_id)?),
        };

        tracing::debug!(user = user_id, scope = %scope.kind(), "loaded export document");
        Ok(document)
    }
}
