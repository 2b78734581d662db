//! Display strings derived from a [`PersonRecord`]. Nothing here is stored.

use crate::model::PersonRecord;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// "first last".
pub fn full_name(record: &PersonRecord) -> String {
    format!("{} {}", record.first_name(), record.last_name())
}

pub fn formatted_cell(record: &PersonRecord) -> String {
    format_cell(record.cell())
}

pub fn formatted_birthday(record: &PersonRecord) -> String {
    format_birthday(record.birthday())
}

/// Ten digits (after dropping everything else) become `(AAA) BBB-CCCC`;
/// anything else is returned untouched.
pub fn format_cell(cell: &str) -> String {
    let digits: String = cell.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
    } else {
        cell.to_string()
    }
}

/// `M/D/YYYY` without zero padding, or an empty string when the date can't be
/// parsed.
pub fn format_birthday(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        None => String::new(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
