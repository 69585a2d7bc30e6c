//! Markdown export of classes, courses and notes.
//!
//! The exporter is a pure function of its input tree and options: it never
//! performs I/O and produces byte-identical output for identical input.

mod builder;
mod date;
mod files;
mod markdown;
mod metadata;
mod toc;

pub use builder::{MarkdownBuilder, Siblings};
pub use date::format_date;
pub use files::ExportFiles;
pub use markdown::{COMPLETE_EXPORT_FILE, EXPORT_TITLE, MarkdownExporter};
pub use metadata::{front_matter, inline};
pub use toc::{TOC_HEADING, TableOfContents};
