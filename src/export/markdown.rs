//! Markdown rendering of notes, courses, classes and whole forests.

use chrono::Local;

use crate::domain::{Class, Course, ExportDocument, ExportOptions, Note, Timestamp};
use crate::export::builder::{MarkdownBuilder, Siblings};
use crate::export::date::format_date;
use crate::export::files::ExportFiles;
use crate::export::metadata::{front_matter, inline};
use crate::export::toc::TableOfContents;
use crate::infra::{download_file_name, sanitize_file_name};

/// Title of the single-document forest export.
pub const EXPORT_TITLE: &str = "Export Notra";

/// File name of the single-document forest export.
pub const COMPLETE_EXPORT_FILE: &str = "notra_export_complete.md";

/// Between courses of a class, and between notes of a course.
const SECTION_SEPARATOR: &str = "\n---\n\n";

/// Between notes nested under a course inside a class document.
const NESTED_NOTE_SEPARATOR: &str = "\n";

/// Between classes in the single-document forest export.
const CLASS_SEPARATOR: &str = "\n\n---\n\n";

/// Renders hierarchical notes as Markdown.
///
/// The exporter holds only its options and the export date shown in the
/// forest header, so rendering the same input twice yields identical text.
///
/// # Examples
///
/// ```
/// use notra::domain::{ExportOptions, Note};
/// use notra::export::MarkdownExporter;
/// use chrono::{FixedOffset, TimeZone};
///
/// let at = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
/// let options = ExportOptions { include_metadata: false, ..ExportOptions::default() };
/// let exporter = MarkdownExporter::new(options);
///
/// let note = Note::new("n1", "Intro", "Hello", at, at);
/// assert_eq!(exporter.export_note(&note), "# Intro\n\nHello\n\n");
/// ```
#[derive(Debug, Clone)]
pub struct MarkdownExporter {
    options: ExportOptions,
    exported_at: Timestamp,
}

impl MarkdownExporter {
    /// Creates an exporter stamped with the current local time.
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            exported_at: Local::now().fixed_offset(),
        }
    }

    /// Fixes the date printed in the forest export header.
    pub fn with_export_date(mut self, exported_at: Timestamp) -> Self {
        self.exported_at = exported_at;
        self
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    // ===========================================
    // Single Documents
    // ===========================================

    /// Renders one note as a standalone document.
    pub fn export_note(&self, note: &Note) -> String {
        let mut out = MarkdownBuilder::new();
        out.raw(&front_matter(note, &self.options));
        out.heading(1, note.title());
        out.paragraph(note.content());
        out.finish()
    }

    /// Renders a course with all of its notes.
    pub fn export_course(&self, course: &Course) -> String {
        let mut out = MarkdownBuilder::new();
        out.raw(&front_matter(course, &self.options));
        out.heading(1, course.name());

        if self.options.include_table_of_contents {
            let mut toc = TableOfContents::new();
            for (i, note) in course.notes().iter().enumerate() {
                toc.push(vec![i + 1], note.title());
            }
            toc.render_into(&mut out);
        }

        if !course.notes().is_empty() {
            out.heading(2, "Notes");
            let mut siblings = Siblings::new(SECTION_SEPARATOR);
            for note in course.notes() {
                siblings.next(&mut out);
                self.note_section(&mut out, note);
            }
        }

        out.finish()
    }

    /// Renders a class, its courses and their notes as one document.
    ///
    /// Headings are level 1 for the class, 2 for courses and 3 for notes.
    pub fn export_class(&self, class: &Class) -> String {
        let mut out = MarkdownBuilder::new();
        self.class_document(&mut out, class, false);
        out.finish()
    }

    /// Writes a class document; `anchor_title` also anchors the class heading
    /// so a forest table of contents can link to it.
    fn class_document(&self, out: &mut MarkdownBuilder, class: &Class, anchor_title: bool) {
        out.raw(&front_matter(class, &self.options));
        if anchor_title {
            out.anchor_for(class.name());
        }
        out.heading(1, class.name());

        if self.options.include_table_of_contents {
            let mut toc = TableOfContents::new();
            for (i, course) in class.courses().iter().enumerate() {
                toc.push(vec![i + 1], course.name());
                for (j, note) in course.notes().iter().enumerate() {
                    toc.push(vec![i + 1, j + 1], note.title());
                }
            }
            toc.render_into(out);
        }

        let mut courses = Siblings::new(SECTION_SEPARATOR);
        for course in class.courses() {
            courses.next(out);
            out.anchor_for(course.name());
            out.heading(2, course.name());
            if let Some(line) = inline(course, &self.options) {
                out.paragraph(&line);
            }

            let mut notes = Siblings::new(NESTED_NOTE_SEPARATOR);
            for note in course.notes() {
                notes.next(out);
                self.note_section(out, note);
            }
        }
    }

    // ===========================================
    // Forest
    // ===========================================

    /// Renders a whole forest.
    ///
    /// Produces a single document unless `separate_files` is set, in which
    /// case every note, course and class gets its own file.
    pub fn export_all(&self, classes: &[Class]) -> ExportFiles {
        let files = if self.options.separate_files {
            self.export_separate(classes)
        } else {
            self.export_combined(classes)
        };

        tracing::debug!(
            classes = classes.len(),
            files = files.len(),
            separate = self.options.separate_files,
            "exported forest"
        );
        files
    }

    /// Renders any export target into its files.
    ///
    /// Single entities produce one file named after their title.
    pub fn export(&self, document: &ExportDocument) -> ExportFiles {
        let mut files = ExportFiles::new();
        match document {
            ExportDocument::Note(note) => {
                files.insert(download_file_name(note.title()), self.export_note(note));
            }
            ExportDocument::Course(course) => {
                files.insert(download_file_name(course.name()), self.export_course(course));
            }
            ExportDocument::Class(class) => {
                files.insert(download_file_name(class.name()), self.export_class(class));
            }
            ExportDocument::Forest(classes) => return self.export_all(classes),
        }
        files
    }

    fn export_combined(&self, classes: &[Class]) -> ExportFiles {
        let mut out = MarkdownBuilder::new();
        out.heading(1, EXPORT_TITLE);
        out.paragraph(&format!(
            "*Exporté le {}*",
            format_date(&self.exported_at, self.options.date_format)
        ));

        if self.options.include_table_of_contents {
            let mut toc = TableOfContents::new();
            for (i, class) in classes.iter().enumerate() {
                toc.push(vec![i + 1], class.name());
                for (j, course) in class.courses().iter().enumerate() {
                    toc.push(vec![i + 1, j + 1], course.name());
                    for (k, note) in course.notes().iter().enumerate() {
                        toc.push(vec![i + 1, j + 1, k + 1], note.title());
                    }
                }
            }
            toc.render_into(&mut out);
        }

        let mut siblings = Siblings::new(CLASS_SEPARATOR);
        for class in classes {
            siblings.next(&mut out);
            self.class_document(&mut out, class, true);
        }

        let mut files = ExportFiles::new();
        files.insert(COMPLETE_EXPORT_FILE, out.finish());
        files
    }

    fn export_separate(&self, classes: &[Class]) -> ExportFiles {
        let mut files = ExportFiles::new();
        for class in classes {
            let class_stem = sanitize_file_name(class.name());
            for course in class.courses() {
                let course_stem = format!("{class_stem}_{}", sanitize_file_name(course.name()));
                for note in course.notes() {
                    let name = format!("{course_stem}_{}.md", sanitize_file_name(note.title()));
                    files.insert(name, self.export_note(note));
                }
                files.insert(format!("{course_stem}.md"), self.export_course(course));
            }
            files.insert(format!("{class_stem}_complete.md"), self.export_class(class));
        }
        files
    }

    /// Anchored level-3 section for a note nested in a larger document.
    fn note_section(&self, out: &mut MarkdownBuilder, note: &Note) {
        out.anchor_for(note.title());
        out.heading(3, note.title());
        if let Some(line) = inline(note, &self.options) {
            out.paragraph(&line);
        }
        out.paragraph(note.content());
    }
}
