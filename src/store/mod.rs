//! SQLite store of users' classes, courses and notes

mod repository;
mod schema;
mod sqlite;


pub use repository::{ExportRepository, StoreError, StoreResult};
pub use schema::{SCHEMA_VERSION, create_schema};
pub use sqlite::{ImportSummary, SqliteStore};
