//! Interpretation of period labels.
//!
//! Labels stay as authored; this only reads them as calendar months so that
//! validation can spot a range that ends before it starts.

use chrono::{Datelike, NaiveDate};

use super::model::EndPeriod;

/// Read a label such as `August 2024`, `Jan 2024` or `2025` as the first day
/// of that month (or year). Returns `None` for anything else.
#[must_use]
pub fn parse_label(label: &str) -> Option<NaiveDate> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    if label.len() == 4 && label.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = label.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    // %B accepts both full and abbreviated month names when parsing.
    NaiveDate::parse_from_str(&format!("1 {label}"), "%d %B %Y").ok()
}

/// Whether the range is known to run backwards.
///
/// Unparseable labels and open ends are never reported.
#[must_use]
pub fn is_reversed(start: &str, end: &EndPeriod) -> bool {
    let EndPeriod::Until(end) = end else {
        return false;
    };
    match (parse_label(start), parse_label(end)) {
        (Some(start), Some(end)) => month_index(end) < month_index(start),
        _ => false,
    }
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Split a free-form range label such as `Jan 2024 - Present` into its ends.
#[must_use]
pub fn split_range(label: &str) -> Option<(&str, EndPeriod)> {
    let (start, end) = label.split_once(" - ")?;
    Some((start.trim(), EndPeriod::from(end.trim())))
}
