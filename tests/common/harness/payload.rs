//! Builders for JSON export payloads with sensible defaults.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use serde_json::{Value, json};

/// Default timestamp for test records.
pub const CREATED: &str = "2024-03-05T09:30:00.000Z";

/// Builder for a test note.
#[derive(Debug, Clone)]
pub struct TestNote {
    id: String,
    title: String,
    content: Option<String>,
    created: String,
    updated: String,
}

impl TestNote {
    /// Creates a note with empty content and unmodified timestamps.
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: Some(String::new()),
            created: CREATED.to_string(),
            updated: CREATED.to_string(),
        }
    }

    /// Sets the Markdown content.
    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    /// Serializes the content as JSON `null`.
    pub fn null_content(mut self) -> Self {
        self.content = None;
        self
    }

    /// Sets the modification timestamp.
    pub fn updated(mut self, updated: &str) -> Self {
        self.updated = updated.to_string();
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "title": self.title,
            "content": self.content,
            "createdAt": self.created,
            "updatedAt": self.updated,
        })
    }
}

/// Builder for a test course.
#[derive(Debug, Clone)]
pub struct TestCourse {
    id: String,
    name: String,
    notes: Vec<TestNote>,
}

impl TestCourse {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            notes: Vec::new(),
        }
    }

    /// Appends a note.
    pub fn note(mut self, note: TestNote) -> Self {
        self.notes.push(note);
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "createdAt": CREATED,
            "updatedAt": CREATED,
            "notes": self.notes.iter().map(TestNote::to_json).collect::<Vec<_>>(),
        })
    }
}

/// Builder for a test class.
#[derive(Debug, Clone)]
pub struct TestClass {
    id: String,
    name: String,
    courses: Vec<TestCourse>,
}

impl TestClass {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            courses: Vec::new(),
        }
    }

    /// Appends a course.
    pub fn course(mut self, course: TestCourse) -> Self {
        self.courses.push(course);
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "createdAt": CREATED,
            "updatedAt": CREATED,
            "courses": self.courses.iter().map(TestCourse::to_json).collect::<Vec<_>>(),
        })
    }
}

/// Builds a whole-forest payload: `{"classes": [...]}`.
pub fn forest_payload(classes: &[TestClass]) -> String {
    json!({ "classes": classes.iter().map(TestClass::to_json).collect::<Vec<_>>() }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_json_uses_camel_case_keys() {
        let value = TestNote::new("n1", "Intro").to_json();
        assert_eq!(value["createdAt"], CREATED);
        assert_eq!(value["content"], "");
    }

    #[test]
    fn test_null_content_serializes_as_null() {
        let value = TestNote::new("n1", "Intro").null_content().to_json();
        assert!(value["content"].is_null());
    }

    #[test]
    fn test_forest_payload_nests_children() {
        let payload = forest_payload(&[TestClass::new("k1", "Math")
            .course(TestCourse::new("c1", "Algebra").note(TestNote::new("n1", "Intro")))]);
        let value: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["classes"][0]["courses"][0]["notes"][0]["id"], "n1");
    }
}
