//! Course record: an ordered collection of notes inside a class.

use serde::Deserialize;

use super::{Note, Timestamp, Timestamped};

/// A course and its notes, in caller-supplied order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    id: String,
    name: String,
    created_at: Timestamp,
    updated_at: Timestamp,
    #[serde(default)]
    notes: Vec<Note>,
}

impl Course {
    /// Creates a course with no notes.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at,
            updated_at,
            notes: Vec::new(),
        }
    }

    /// Replaces the notes, keeping the given order.
    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
}

impl Timestamped for Course {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
