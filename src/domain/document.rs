//! The input handed to the exporter for one request.

use super::{Class, Course, Note, ScopeKind};

/// A loaded export target at one of the four granularities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportDocument {
    Note(Note),
    Course(Course),
    Class(Class),
    Forest(Vec<Class>),
}

impl ExportDocument {
    pub fn kind(&self) -> ScopeKind {
        match self {
            Self::Note(_) => ScopeKind::Note,
            Self::Course(_) => ScopeKind::Course,
            Self::Class(_) => ScopeKind::Class,
            Self::Forest(_) => ScopeKind::All,
        }
    }
}
