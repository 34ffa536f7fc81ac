//! Time utility functions

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Default format for date filter literals
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date or date-time literal with a chrono format string
///
/// Formats without a time component resolve to midnight.
pub fn parse_with_format(value: &str, format: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, format)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, format)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}
