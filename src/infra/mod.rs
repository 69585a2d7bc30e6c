//! File I/O, payload parsing, slugs, logging

mod fs;
pub mod logging;
mod payload;
mod slug;

pub use fs::{FsError, write_file, write_files};
pub use payload::{ExportPayload, PayloadError};
pub use slug::{UNTITLED, download_file_name, sanitize_file_name, slugify};
