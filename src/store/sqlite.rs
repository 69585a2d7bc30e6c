//! SQLite-backed notes store.

use chrono::{DateTime, SecondsFormat};
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::Path;

use crate::domain::{Class, Course, Note, Timestamp, Timestamped};
use crate::store::repository::{ExportRepository, StoreError, StoreResult};
use crate::store::schema::create_schema;

/// Counts of records written by an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub classes: usize,
    pub courses: usize,
    pub notes: usize,
}

/// SQLite-backed store of users' class forests.
pub struct SqliteStore {
    conn: Connection,
}

/// `(id, name or title, created_at, updated_at)` as stored.
type RecordRow = (String, String, String, String);

impl SqliteStore {
    // ===========================================
    // Connections
    // ===========================================

    /// Opens an in-memory database with the store schema.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Opens or creates a database at the given path.
    ///
    /// Creates parent directories if they don't exist.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        create_schema(&conn)?;
        tracing::debug!(path = %path.display(), "opened store");
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // ===========================================
    // Writes
    // ===========================================

    /// Imports classes with their courses and notes for a user.
    ///
    /// Runs in a single transaction: either the whole forest is stored or
    /// nothing is.
    pub fn import_forest(&mut self, user_id: &str, classes: &[Class]) -> StoreResult<ImportSummary> {
        let tx = self.conn.transaction()?;
        tx.execute("INSERT OR IGNORE INTO users (id) VALUES (?1)", [user_id])?;

        let mut summary = ImportSummary::default();
        for class in classes {
            tx.execute(
                "INSERT INTO classes (id, user_id, name, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    class.id(),
                    user_id,
                    class.name(),
                    format_timestamp(&class.created_at()),
                    format_timestamp(&class.updated_at()),
                ],
            )?;
            summary.classes += 1;

            for course in class.courses() {
                tx.execute(
                    "INSERT INTO courses (id, class_id, name, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        course.id(),
                        class.id(),
                        course.name(),
                        format_timestamp(&course.created_at()),
                        format_timestamp(&course.updated_at()),
                    ],
                )?;
                summary.courses += 1;

                for note in course.notes() {
                    tx.execute(
                        "INSERT INTO notes (id, course_id, title, content, created_at, updated_at)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                        params![
                            note.id(),
                            course.id(),
                            note.title(),
                            note.content(),
                            format_timestamp(&note.created_at()),
                            format_timestamp(&note.updated_at()),
                        ],
                    )?;
                    summary.notes += 1;
                }
            }
        }

        tx.commit()?;
        tracing::debug!(
            user = user_id,
            classes = summary.classes,
            courses = summary.courses,
            notes = summary.notes,
            "imported forest"
        );
        Ok(summary)
    }

    /// Deletes a class and, by cascade, its courses and notes.
    ///
    /// Returns false if no such class exists.
    pub fn delete_class(&self, class_id: &str) -> StoreResult<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM classes WHERE id = ?1", [class_id])?;
        Ok(deleted > 0)
    }

    // ===========================================
    // Child Loading
    // ===========================================

    fn notes_for_course(&self, course_id: &str) -> StoreResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, content, created_at, updated_at
             FROM notes WHERE course_id = ?1
             ORDER BY julianday(created_at) ASC, rowid ASC",
        )?;
        let rows = stmt
            .query_map([course_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|(id, title, content, created, updated)| {
                Ok(Note::new(
                    id,
                    title,
                    content,
                    parse_timestamp("notes", &created)?,
                    parse_timestamp("notes", &updated)?,
                ))
            })
            .collect()
    }

    fn courses_for_class(&self, class_id: &str) -> StoreResult<Vec<Course>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, created_at, updated_at
             FROM courses WHERE class_id = ?1
             ORDER BY julianday(created_at) ASC, rowid ASC",
        )?;
        let rows = stmt
            .query_map([class_id], record_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|row| self.course_from_row(row))
            .collect()
    }

    fn course_from_row(&self, (id, name, created, updated): RecordRow) -> StoreResult<Course> {
        let notes = self.notes_for_course(&id)?;
        let course = Course::new(
            id,
            name,
            parse_timestamp("courses", &created)?,
            parse_timestamp("courses", &updated)?,
        );
        Ok(course.with_notes(notes))
    }

    fn class_from_row(&self, (id, name, created, updated): RecordRow) -> StoreResult<Class> {
        let courses = self.courses_for_class(&id)?;
        let class = Class::new(
            id,
            name,
            parse_timestamp("classes", &created)?,
            parse_timestamp("classes", &updated)?,
        );
        Ok(class.with_courses(courses))
    }
}

impl ExportRepository for SqliteStore {
    fn find_note(&self, user_id: &str, note_id: &str) -> StoreResult<Option<Note>> {
        let row = self
            .conn
            .query_row(
                "SELECT n.id, n.title, n.content, n.created_at, n.updated_at
                 FROM notes n
                 JOIN courses c ON c.id = n.course_id
                 JOIN classes k ON k.id = c.class_id
                 WHERE n.id = ?1 AND k.user_id = ?2",
                [note_id, user_id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()?;

        row.map(|(id, title, content, created, updated)| {
            Ok(Note::new(
                id,
                title,
                content,
                parse_timestamp("notes", &created)?,
                parse_timestamp("notes", &updated)?,
            ))
        })
        .transpose()
    }

    fn find_course(&self, user_id: &str, course_id: &str) -> StoreResult<Option<Course>> {
        let row = self
            .conn
            .query_row(
                "SELECT c.id, c.name, c.created_at, c.updated_at
                 FROM courses c
                 JOIN classes k ON k.id = c.class_id
                 WHERE c.id = ?1 AND k.user_id = ?2",
                [course_id, user_id],
                record_row,
            )
            .optional()?;

        row.map(|row| self.course_from_row(row)).transpose()
    }

    fn find_class(&self, user_id: &str, class_id: &str) -> StoreResult<Option<Class>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, created_at, updated_at
                 FROM classes WHERE id = ?1 AND user_id = ?2",
                [class_id, user_id],
                record_row,
            )
            .optional()?;

        row.map(|row| self.class_from_row(row)).transpose()
    }

    fn list_classes(&self, user_id: &str) -> StoreResult<Vec<Class>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, created_at, updated_at
             FROM classes WHERE user_id = ?1
             ORDER BY julianday(created_at) ASC, rowid ASC",
        )?;
        let rows = stmt
            .query_map([user_id], record_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|row| self.class_from_row(row))
            .collect()
    }
}

fn record_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RecordRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

/// Keeps the offset the record carried; queries order on `julianday()`
/// since text order is not time order across offsets.
fn format_timestamp(at: &Timestamp) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, false)
}

fn parse_timestamp(table: &'static str, value: &str) -> StoreResult<Timestamp> {
    DateTime::parse_from_rfc3339(value).map_err(|_| StoreError::InvalidTimestamp {
        table,
        value: value.to_string(),
    })
}
