//! Created/updated metadata rendering.
//!
//! Whole-document exports start with a front matter block; sections inside
//! a document carry a single italic line instead.

use crate::domain::{ExportOptions, Timestamped};
use crate::export::date::format_date;

/// Renders the front matter block for a whole-document export.
///
/// Returns an empty string when metadata is disabled.
pub fn front_matter(item: &impl Timestamped, options: &ExportOptions) -> String {
    if !options.include_metadata {
        return String::new();
    }

    format!(
        "---\ncreated: {}\nupdated: {}\n---\n\n",
        format_date(&item.created_at(), options.date_format),
        format_date(&item.updated_at(), options.date_format),
    )
}

/// Renders the italic metadata line for a section, without trailing newline.
///
/// The modification clause only appears when the item was updated after
/// creation.
pub fn inline(item: &impl Timestamped, options: &ExportOptions) -> Option<String> {
    if !options.include_metadata {
        return None;
    }

    let created = format_date(&item.created_at(), options.date_format);
    let line = if item.was_modified() {
        let updated = format_date(&item.updated_at(), options.date_format);
        format!("*Créé le {created} - Modifié le {updated}*")
    } else {
        format!("*Créé le {created}*")
    };
    Some(line)
}
