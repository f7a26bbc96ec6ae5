// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-day arithmetic.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Calendar day a UTC timestamp falls on for an athlete at `offset`.
pub fn local_day(timestamp: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    timestamp.with_timezone(&offset).date_naive()
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Parse a date given either as `YYYY-MM-DD` or as an RFC3339 timestamp.
///
/// Timestamps are reduced to their UTC calendar day.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_local_day_crosses_midnight() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 10, 3, 30, 0).unwrap();
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();

        assert_eq!(local_day(ts, FixedOffset::east_opt(0).unwrap()), date(2024, 3, 10));
        assert_eq!(local_day(ts, pacific), date(2024, 3, 9));
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 8)), 7);
        assert_eq!(days_between(date(2024, 1, 8), date(2024, 1, 1)), -7);
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-05-01"), Some(date(2024, 5, 1)));
        assert_eq!(parse_date("2024-05-01T23:30:00-02:00"), Some(date(2024, 5, 2)));
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }
}
