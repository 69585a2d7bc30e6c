//! Date rendering for export metadata.

use crate::domain::{DateFormat, Timestamp};

/// Formats a timestamp as a calendar date.
///
/// The date is taken in the offset the timestamp carries; no timezone
/// conversion happens.
///
/// # Examples
///
/// ```
/// use notra::domain::DateFormat;
/// use notra::export::format_date;
/// use chrono::{FixedOffset, TimeZone};
///
/// let at = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
/// assert_eq!(format_date(&at, DateFormat::Iso), "2024-03-05");
/// assert_eq!(format_date(&at, DateFormat::French), "05/03/2024");
/// assert_eq!(format_date(&at, DateFormat::Us), "3/5/2024");
/// ```
pub fn format_date(at: &Timestamp, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Iso => "%Y-%m-%d",
        DateFormat::French => "%d/%m/%Y",
        DateFormat::Us => "%-m/%-d/%Y",
    };
    at.format(pattern).to_string()
}
