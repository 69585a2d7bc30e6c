//! Note record: a titled Markdown document belonging to a course.

use serde::Deserialize;
use std::fmt;

use super::{Timestamp, Timestamped, null_as_empty};

/// A single note.
///
/// Notes are read-only from the exporter's point of view. The content is
/// Markdown and is passed through verbatim; an empty body is valid.
///
/// # Examples
///
/// ```
/// use notra::domain::Note;
/// use chrono::{FixedOffset, TimeZone};
///
/// let at = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
/// let note = Note::new("n1", "Intro", "Hello", at, at);
/// assert_eq!(note.title(), "Intro");
/// assert!(note.has_content());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: String,
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    content: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Note {
    /// Creates a note from its stored fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            created_at,
            updated_at,
        }
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw Markdown body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns true if the body is non-empty.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

impl Timestamped for Note {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}
