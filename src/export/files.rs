//! Ordered file name → Markdown mapping produced by an export.

use std::collections::HashSet;

/// The files produced by one export, in traversal order.
///
/// Names are unique: inserting a name that is already taken stores the
/// content under `name-2.md`, `name-3.md`, ... instead, so no produced file
/// is ever lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportFiles {
    entries: Vec<(String, String)>,
    names: HashSet<String>,
}

impl ExportFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file and returns the name it was stored under.
    pub fn insert(&mut self, name: impl Into<String>, content: String) -> &str {
        let name = self.unique_name(name.into());
        self.names.insert(name.clone());
        self.entries.push((name, content));
        &self.entries[self.entries.len() - 1].0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first produced file.
    pub fn first(&self) -> Option<(&str, &str)> {
        self.entries
            .first()
            .map(|(name, content)| (name.as_str(), content.as_str()))
    }

    /// Returns the content stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, content)| content.as_str())
    }

    /// Iterates over `(name, content)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_str()))
    }

    /// Iterates over file names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    fn unique_name(&self, name: String) -> String {
        if !self.names.contains(&name) {
            return name;
        }

        let (stem, ext) = match name.rfind('.') {
            Some(dot) if dot > 0 => name.split_at(dot),
            _ => (name.as_str(), ""),
        };
        let mut n = 2;
        loop {
            let candidate = format!("{stem}-{n}{ext}");
            if !self.names.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

impl IntoIterator for ExportFiles {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
