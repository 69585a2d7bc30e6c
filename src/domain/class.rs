//! Class record: the root of one tree in a user's forest.

use serde::Deserialize;

use super::{Course, Timestamp, Timestamped};

/// A class and its courses, in caller-supplied order.
///
/// # Examples
///
/// ```
/// use notra::domain::{Class, Course};
/// use chrono::{FixedOffset, TimeZone};
///
/// let at = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
/// let class = Class::new("k1", "Math", at, at)
///     .with_courses(vec![Course::new("c1", "Algebra", at, at)]);
/// assert_eq!(class.courses().len(), 1);
/// assert_eq!(class.note_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    id: String,
    name: String,
    created_at: Timestamp,
    updated_at: Timestamp,
    #[serde(default)]
    courses: Vec<Course>,
}

impl Class {
    /// Creates a class with no courses.
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
            courses: Vec::new(),
        }
    }

    /// Replaces the courses, keeping the given order.
    pub fn with_courses(mut self, courses: Vec<Course>) -> Self {
        self.courses = courses;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Total number of notes across all courses.
    pub fn note_count(&self) -> usize {
        self.courses.iter().map(|c| c.notes().len()).sum()
    }
}

impl Timestamped for Class {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
