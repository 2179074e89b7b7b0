// QuoteDeck - core/date.rs
//
// Flexible event-date normalisation shared by the range filter and the
// sort comparator. Both call sites use this one helper so the same
// input string always normalises to the same result.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

/// chrono formats tried, in order, by the flexible fallback parse.
///
/// Numeric chrono specifiers accept non-zero-padded values, so
/// "%Y-%m-%d" also recovers inputs like "2024-3-5".
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Datetime formats tried when the input carries a time component;
/// only the date part is kept.
const FALLBACK_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Normalise a free-text date to ISO `YYYY-MM-DD`.
///
/// Pure and total — never fails for any input:
/// - empty/whitespace input → `None`;
/// - already `YYYY-MM-DD` → returned unchanged (no calendar validation,
///   matching the accepted-pattern contract);
/// - `M/D/YYYY` with 1-2 digit month/day → zero-padded ISO;
/// - anything else → flexible fallback parse; `None` when nothing matches.
///
/// Unparsable dates are "no date": rows carrying them sort before all
/// real dates and are excluded whenever a range bound is active.
pub fn parse_date_flexible(s: &str) -> Option<String> {
    static ISO_RE: OnceLock<Regex> = OnceLock::new();
    static MDY_RE: OnceLock<Regex> = OnceLock::new();

    let iso_re = ISO_RE.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("parse_date_flexible: invalid ISO regex")
    });
    let mdy_re = MDY_RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$")
            .expect("parse_date_flexible: invalid M/D/YYYY regex")
    });

    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    if iso_re.is_match(trimmed) {
        return Some(trimmed.to_string());
    }

    if let Some(caps) = mdy_re.captures(trimmed) {
        // Zero-pad month and day; the year is already four digits.
        let (month, day, year) = (&caps[1], &caps[2], &caps[3]);
        return Some(format!("{year}-{month:0>2}-{day:0>2}"));
    }

    flexible_fallback(trimmed)
}

/// Best-effort recovery for dates outside the two accepted patterns.
/// Tried from most-specific to least; first success wins.
fn flexible_fallback(trimmed: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }

    for format in FALLBACK_DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(ndt.date().format("%Y-%m-%d").to_string());
        }
    }

    for format in FALLBACK_DATE_FORMATS {
        if let Ok(nd) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(nd.format("%Y-%m-%d").to_string());
        }
    }

    None
}
