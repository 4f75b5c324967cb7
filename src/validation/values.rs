// ABOUTME: Lenient readers for raw form values submitted as JSON
// ABOUTME: Accept numbers or numeric strings, tag lists, comma-separated text and dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// Outcome of reading a scalar form value
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Scalar<T> {
    /// Key missing, `null`, or blank text
    Absent,
    /// Present but not interpretable as `T`
    Invalid,
    /// Parsed value
    Present(T),
}

/// Whether a value counts as "not filled in"
pub(crate) fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Read a finite number from a JSON number or numeric string
pub(crate) fn read_number(value: Option<&Value>) -> Scalar<f64> {
    if is_blank(value) {
        return Scalar::Absent;
    }
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() => Scalar::Present(n),
        _ => Scalar::Invalid,
    }
}

/// Read trimmed text; non-string values are invalid
pub(crate) fn read_text(value: Option<&Value>) -> Scalar<String> {
    if is_blank(value) {
        return Scalar::Absent;
    }
    match value {
        Some(Value::String(s)) => Scalar::Present(s.trim().to_owned()),
        _ => Scalar::Invalid,
    }
}

/// Read a list of strings; a missing key reads as an empty list
pub(crate) fn read_string_list(value: Option<&Value>) -> Option<Vec<String>> {
    match value {
        None | Some(Value::Null) => Some(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect(),
        _ => None,
    }
}

/// Read allergies from a list or a comma-separated string.
///
/// Entries are trimmed, blanks dropped and case-insensitive duplicates removed,
/// keeping the first spelling.
pub(crate) fn read_free_text_list(value: Option<&Value>) -> Option<Vec<String>> {
    let raw: Vec<String> = match value {
        Some(Value::String(s)) => s.split(',').map(str::to_owned).collect(),
        other => read_string_list(other)?,
    };
    let mut seen = std::collections::HashSet::new();
    Some(
        raw.into_iter()
            .map(|entry| entry.trim().to_owned())
            .filter(|entry| !entry.is_empty())
            .filter(|entry| seen.insert(entry.to_lowercase()))
            .collect(),
    )
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_number_accepts_numeric_strings() {
        assert_eq!(read_number(Some(&json!("25"))), Scalar::Present(25.0));
        assert_eq!(read_number(Some(&json!(" 1.5 "))), Scalar::Present(1.5));
        assert_eq!(read_number(Some(&json!(70))), Scalar::Present(70.0));
    }

    #[test]
    fn test_read_number_distinguishes_absent_and_invalid() {
        assert_eq!(read_number(None), Scalar::Absent);
        assert_eq!(read_number(Some(&json!(""))), Scalar::Absent);
        assert_eq!(read_number(Some(&Value::Null)), Scalar::Absent);
        assert_eq!(read_number(Some(&json!("abc"))), Scalar::Invalid);
        assert_eq!(read_number(Some(&json!(true))), Scalar::Invalid);
        assert_eq!(read_number(Some(&json!("NaN"))), Scalar::Invalid);
    }

    #[test]
    fn test_free_text_list_splits_and_dedupes() {
        assert_eq!(
            read_free_text_list(Some(&json!("peanuts, Shellfish ,, peanuts"))),
            Some(vec!["peanuts".to_owned(), "Shellfish".to_owned()])
        );
        assert_eq!(read_free_text_list(None), Some(vec![]));
        assert_eq!(read_free_text_list(Some(&json!(3))), None);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 4, 22);
        assert_eq!(parse_date("2025-04-22"), expected);
        assert_eq!(parse_date("2025-04-22T04:48:00.000Z"), expected);
        assert_eq!(parse_date("22/04/2025"), None);
    }
}
