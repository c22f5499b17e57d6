//! The external system's timestamp format
//!
//! Everything crossing the invoicing boundary uses `DD.MM.YYYY HH:mm:ss`.
//! Parsing is deliberately forgiving at the call-site level: a malformed
//! value yields `None` and callers drop the filter instead of failing the
//! request.

use chrono::NaiveDateTime;

const PATTERN: &str = "%d.%m.%Y %H:%M:%S";

/// Parse an external-format timestamp.
///
/// Returns `None` unless the input carries both a date and a time
/// component in the exact pattern.
pub fn parse(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    let (date, time) = input.split_once(' ')?;
    if date.is_empty() || time.is_empty() {
        return None;
    }

    NaiveDateTime::parse_from_str(input, PATTERN).ok()
}

/// Format a timestamp in the external pattern, zero-padded throughout.
/// Strict inverse of [`parse`] at second precision.
pub fn format(timestamp: NaiveDateTime) -> String {
    timestamp.format(PATTERN).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_valid_timestamp() {
        let parsed = parse("18.01.2026 10:00:00").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2026, 1, 18)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_format_zero_pads() {
        let timestamp = NaiveDate::from_ymd_opt(2026, 3, 5)
            .unwrap()
            .and_hms_opt(7, 4, 9)
            .unwrap();
        assert_eq!(format(timestamp), "05.03.2026 07:04:09");
    }

    #[test]
    fn test_round_trip() {
        let original = "31.12.2025 23:59:59";
        assert_eq!(format(parse(original).unwrap()), original);
    }

    #[test]
    fn test_parse_rejects_date_only() {
        assert!(parse("18.01.2026").is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("").is_none());
        assert!(parse("not a date at all").is_none());
        assert!(parse("2026-01-18 10:00:00").is_none());
        assert!(parse("32.01.2026 10:00:00").is_none());
    }
}
