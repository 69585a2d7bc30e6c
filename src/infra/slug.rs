//! Slug generation for in-document anchors and exported file names.

use regex::Regex;
use std::sync::LazyLock;

/// Characters that are illegal in file names on common filesystems.
static ILLEGAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("illegal character pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Placeholder used when a title or name has no usable characters.
pub const UNTITLED: &str = "untitled";

/// Converts a title or name to an anchor slug.
///
/// - Trims surrounding whitespace
/// - Replaces `< > : " / \ | ? *` with hyphens
/// - Collapses each run of whitespace into a single hyphen
/// - Converts to lowercase
/// - Returns "untitled" for empty input
///
/// The same function produces both the `<a id>` anchors and the table of
/// contents link targets, so the two always agree. Distinct titles may
/// produce the same slug; no disambiguation is applied.
///
/// # Examples
///
/// ```
/// use notra::infra::slugify;
///
/// assert_eq!(slugify("Linear Algebra"), "linear-algebra");
/// assert_eq!(slugify("Q&A: Part 1/2"), "q&a--part-1-2");
/// assert_eq!(slugify("   "), "untitled");
/// ```
pub fn slugify(text: &str) -> String {
    normalize(text, "-")
}

/// Converts a title or name to a file name stem.
///
/// Same rule as [`slugify`], but whitespace becomes an underscore so the
/// parts of multi-file names stay readable.
///
/// # Examples
///
/// ```
/// use notra::infra::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("Linear Algebra"), "linear_algebra");
/// ```
pub fn sanitize_file_name(text: &str) -> String {
    normalize(text, "_")
}

/// Builds the file name offered for a single-entity download.
///
/// Illegal characters become hyphens; case and spaces are kept.
///
/// # Examples
///
/// ```
/// use notra::infra::download_file_name;
///
/// assert_eq!(download_file_name("Week 1: Intro"), "Week 1- Intro.md");
/// assert_eq!(download_file_name(""), "untitled.md");
/// ```
pub fn download_file_name(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return format!("{UNTITLED}.md");
    }
    format!("{}.md", ILLEGAL_CHARS.replace_all(trimmed, "-"))
}

fn normalize(text: &str, space: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return UNTITLED.to_string();
    }

    let legal = ILLEGAL_CHARS.replace_all(trimmed, "-");
    WHITESPACE_RUN.replace_all(&legal, space).to_lowercase()
}
