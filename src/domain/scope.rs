//! Export scope selection.

use std::fmt;

/// Which part of a user's forest an export request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportScope {
    Note(String),
    Course(String),
    Class(String),
    All,
}

/// The granularity of a scope, without its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Note,
    Course,
    Class,
    All,
}

impl ExportScope {
    /// Builds a scope from optional request identifiers.
    ///
    /// The first identifier present wins, in note > course > class order.
    /// With none present the whole forest is exported.
    ///
    /// # Examples
    ///
    /// ```
    /// use notra::domain::ExportScope;
    ///
    /// let scope = ExportScope::from_query(None, Some("c1"), Some("k1"));
    /// assert_eq!(scope, ExportScope::Course("c1".into()));
    /// assert_eq!(ExportScope::from_query(None, None, None), ExportScope::All);
    /// ```
    pub fn from_query(note: Option<&str>, course: Option<&str>, class: Option<&str>) -> Self {
        let supplied = [note, course, class].iter().filter(|id| id.is_some()).count();
        if supplied > 1 {
            tracing::warn!(
                note = ?note,
                course = ?course,
                class = ?class,
                "several scope identifiers supplied, using the most specific"
            );
        }

        match (note, course, class) {
            (Some(id), _, _) => Self::Note(id.to_string()),
            (None, Some(id), _) => Self::Course(id.to_string()),
            (None, None, Some(id)) => Self::Class(id.to_string()),
            (None, None, None) => Self::All,
        }
    }

    pub fn kind(&self) -> ScopeKind {
        match self {
            Self::Note(_) => ScopeKind::Note,
            Self::Course(_) => ScopeKind::Course,
            Self::Class(_) => ScopeKind::Class,
            Self::All => ScopeKind::All,
        }
    }

    /// Returns the targeted identifier, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Note(id) | Self::Course(id) | Self::Class(id) => Some(id),
            Self::All => None,
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Note => "note",
            Self::Course => "course",
            Self::Class => "class",
            Self::All => "all",
        };
        f.write_str(name)
    }
}
