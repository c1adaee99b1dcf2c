//! Parsing for the matches table's combined date-time field.
//!
//! The source encodes kickoff as a single string, `"13 Jul 1930 - 15:00"`:
//! a day-month-year date, the literal separator `" - "`, and a 24-hour
//! wall-clock time. Either half failing to parse marks the whole row for
//! removal, so every helper here returns `Option` instead of an error.

use chrono::{NaiveDate, NaiveTime};

/// English month abbreviations as the archive spells them. Matching is
/// exact: `"JUL"` and `"jul"` are not months.
const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Splits a combined field on the literal `" - "` separator.
///
/// Returns the date half and the time half, both untrimmed. A field with no
/// separator has no time half and yields `None`; anything after a second
/// separator is ignored.
pub fn split_datetime(raw: &str) -> Option<(&str, &str)> {
    let mut parts = raw.split(" - ");
    let date = parts.next()?;
    let time = parts.next()?;
    Some((date, time))
}

/// Parses `"<day> <month-abbrev> <year>"` with a 1-2 digit day and an
/// exactly 4-digit year. Surrounding and repeated whitespace is tolerated.
pub fn parse_match_date(value: &str) -> Option<NaiveDate> {
    let mut tokens = value.split_whitespace();
    let day = tokens.next()?;
    let month = tokens.next()?;
    let year = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }
    let day = parse_digits(day, 1, 2)?;
    let month = month_number(month)?;
    let year = parse_digits(year, 4, 4)?;
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Parses `"HH:MM"` (24-hour) after trimming surrounding whitespace. Hour
/// and minute tokens may be one or two digits; seconds are not part of the
/// source encoding and are fixed at zero.
pub fn parse_match_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    let (hours, minutes) = trimmed.split_once(':')?;
    let hours = parse_digits(hours, 1, 2)?;
    let minutes = parse_digits(minutes, 1, 2)?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

fn month_number(abbrev: &str) -> Option<u32> {
    MONTH_ABBREVS
        .iter()
        .position(|month| *month == abbrev)
        .map(|idx| idx as u32 + 1)
}

fn parse_digits(token: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if token.len() < min_len || token.len() > max_len {
        return None;
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
