//! Epoch-seconds to calendar-date formatting for WHOIS dates.
//!
//! WHOIS services return dates as Unix seconds, sometimes as a JSON number,
//! sometimes as a numeric string, and sometimes as an array of several
//! timestamps. Everything is reduced to text first and then parsed with
//! leading-integer semantics, so `"1551676800"`, `1551676800` and
//! `[1551676800, 1600000000]` all format the same way.

use chrono::DateTime;
use serde_json::Value;

/// Rendered in place of a date that cannot be parsed or represented.
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats Unix epoch seconds as `Month Day, Year` in UTC.
///
/// Non-numeric input yields [`INVALID_DATE`].
///
/// # Examples
///
/// ```
/// use idspy::timestamp::format_date;
///
/// assert_eq!(format_date("1551657600"), "March 4, 2019");
/// assert_eq!(format_date("soon"), "Invalid Date");
/// ```
pub fn format_date(epoch_seconds: &str) -> String {
    parse_leading_int(epoch_seconds)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Formats a raw JSON date value (number, string, array or null).
pub fn format_date_value(value: Option<&Value>) -> String {
    format_date(&value_to_text(value))
}

/// Reduces a JSON value to the text a date parser sees.
///
/// Arrays are joined with commas, so only their first element survives the
/// leading-integer parse.
fn value_to_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| value_to_text(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    }
}

/// Parses the leading base-10 integer of `input`.
///
/// Skips leading whitespace, accepts one optional sign, then takes the
/// longest run of ASCII digits. Returns `None` if there are no digits or the
/// value overflows `i64`.
fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
