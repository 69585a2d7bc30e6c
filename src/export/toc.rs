//! Generated table of contents.

use crate::export::builder::{MarkdownBuilder, heading_text};
use crate::infra::slugify;

/// Heading placed above the table of contents.
pub const TOC_HEADING: &str = "Table des matières";

/// Indentation added per nesting level.
const INDENT: &str = "   ";

#[derive(Debug, Clone, PartialEq, Eq)]
struct TocEntry {
    number: Vec<usize>,
    label: String,
}

/// A numbered, nested list of links to in-document anchors.
///
/// Entry numbers are 1-based paths such as `[2, 1]`, rendered as `2.1.`
/// and indented by three spaces per level below the first.
#[derive(Debug, Clone, Default)]
pub struct TableOfContents {
    entries: Vec<TocEntry>,
}

impl TableOfContents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry pointing at the anchor of `label`.
    pub fn push(&mut self, number: Vec<usize>, label: &str) {
        self.entries.push(TocEntry {
            number,
            label: heading_text(label),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Writes the heading and list; nothing is written for an empty table.
    pub fn render_into(&self, out: &mut MarkdownBuilder) {
        if self.entries.is_empty() {
            return;
        }

        out.heading(2, TOC_HEADING);
        for entry in &self.entries {
            let depth = entry.number.len().saturating_sub(1);
            let number: String = entry.number.iter().map(|n| format!("{n}.")).collect();
            out.raw(&format!(
                "{}{} [{}](#{})\n",
                INDENT.repeat(depth),
                number,
                entry.label,
                slugify(&entry.label)
            ));
        }
        out.raw("\n");
    }
}
