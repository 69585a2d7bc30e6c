//! Core types: Class, Course, Note, export options and scopes

mod class;
mod course;
mod document;
mod note;
mod options;
mod scope;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

pub use class::Class;
pub use course::Course;
pub use document::ExportDocument;
pub use note::Note;
pub use options::{DateFormat, ExportOptions, ParseDateFormatError};
pub use scope::{ExportScope, ScopeKind};

/// A point in time as carried by the source data.
///
/// The offset is kept so dates render exactly as stored.
pub type Timestamp = DateTime<FixedOffset>;

/// Anything carrying creation and last-update timestamps.
pub trait Timestamped {
    fn created_at(&self) -> Timestamp;
    fn updated_at(&self) -> Timestamp;

    /// True when the record was modified after creation.
    fn was_modified(&self) -> bool {
        self.created_at() != self.updated_at()
    }
}

/// Reads a JSON `null` string as an empty one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
