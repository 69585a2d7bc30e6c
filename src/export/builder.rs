//! Accumulator for Markdown output.
//!
//! Every block written through the builder is followed by a blank line,
//! which keeps the separator logic in the exporter independent of the
//! formatting of each block.

use crate::infra::{UNTITLED, slugify};

/// Incrementally builds one Markdown document.
#[derive(Debug, Default)]
pub struct MarkdownBuilder {
    out: String,
}

impl MarkdownBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends text exactly as given.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self
    }

    /// Appends an ATX heading at the given level (1 to 6).
    ///
    /// The text is flattened with [`heading_text`].
    pub fn heading(&mut self, level: usize, text: &str) -> &mut Self {
        let level = level.clamp(1, 6);
        for _ in 0..level {
            self.out.push('#');
        }
        self.out.push(' ');
        self.out.push_str(&heading_text(text));
        self.out.push_str("\n\n");
        self
    }

    /// Appends the anchor for a title, using the table of contents slug.
    pub fn anchor_for(&mut self, title: &str) -> &mut Self {
        self.out.push_str("<a id=\"");
        self.out.push_str(&slugify(title));
        self.out.push_str("\"></a>\n\n");
        self
    }

    /// Appends a block of text; empty text produces nothing.
    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.out.push_str(text);
            self.out.push_str("\n\n");
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Flattens a title onto one line for use in a heading or link label.
///
/// Lines are trimmed and joined with a space; a title with no visible text
/// becomes the untitled placeholder, matching the slug of its anchor.
pub(crate) fn heading_text(text: &str) -> String {
    let line = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if line.is_empty() {
        UNTITLED.to_string()
    } else {
        line
    }
}

/// Places a separator between sibling sections.
///
/// Nothing is written before the first sibling.
#[derive(Debug)]
pub struct Siblings {
    separator: &'static str,
    started: bool,
}

impl Siblings {
    pub fn new(separator: &'static str) -> Self {
        Self {
            separator,
            started: false,
        }
    }

    /// Marks the start of the next sibling, writing the separator if needed.
    pub fn next(&mut self, out: &mut MarkdownBuilder) {
        if self.started {
            out.raw(self.separator);
        }
        self.started = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_uses_level_hashes() {
        let mut out = MarkdownBuilder::new();
        out.heading(1, "One").heading(3, "Three");
        assert_eq!(out.finish(), "# One\n\n### Three\n\n");
    }

    #[test]
    fn blank_heading_uses_placeholder() {
        let mut out = MarkdownBuilder::new();
        out.heading(2, "").heading(3, "  \t ");
        assert_eq!(out.finish(), "## untitled\n\n### untitled\n\n");
    }

    #[test]
    fn multiline_heading_stays_on_one_line() {
        let mut out = MarkdownBuilder::new();
        out.heading(1, "  Week 1\r\n\nIntro  ");
        assert_eq!(out.finish(), "# Week 1 Intro\n\n");
    }

    #[test]
    fn blank_heading_matches_its_anchor() {
        let mut out = MarkdownBuilder::new();
        out.anchor_for(" ").heading(3, " ");
        assert_eq!(out.finish(), "<a id=\"untitled\"></a>\n\n### untitled\n\n");
    }

    #[test]
    fn anchor_uses_slug() {
        let mut out = MarkdownBuilder::new();
        out.anchor_for("Linear Algebra");
        assert_eq!(out.finish(), "<a id=\"linear-algebra\"></a>\n\n");
    }

    #[test]
    fn empty_paragraph_is_skipped() {
        let mut out = MarkdownBuilder::new();
        out.paragraph("");
        assert!(out.is_empty());
        out.paragraph("Hello");
        assert_eq!(out.finish(), "Hello\n\n");
    }

    #[test]
    fn siblings_skip_separator_before_first() {
        let mut out = MarkdownBuilder::new();
        let mut siblings = Siblings::new("---\n");
        for name in ["a", "b", "c"] {
            siblings.next(&mut out);
            out.raw(name);
        }
        assert_eq!(out.finish(), "a---\nb---\nc");
    }

    #[test]
    fn single_sibling_has_no_separator() {
        let mut out = MarkdownBuilder::new();
        let mut siblings = Siblings::new("---\n");
        siblings.next(&mut out);
        out.raw("only");
        assert_eq!(out.finish(), "only");
    }
}
