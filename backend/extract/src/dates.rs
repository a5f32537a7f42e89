//! Expiry date interpretation and derived status fields.
//!
//! Accepted surface forms, tried most-specific first:
//! `DD/MM/YYYY`, `DD/MM/YY`, `MM/YYYY`, `MM/YY`, `YYYY`, `YY`.
//! Components the form omits default to 1 (first day, January).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use shelfscan_core::ExpiryStatus;

/// Interpret an expiry-date string against the accepted forms.
///
/// Returns `None` for anything unrecognized (including the producer's `"NA"`
/// fallback); the raw string is still kept for display by the caller.
pub fn parse_expiry_date(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.trim().split('/').collect();
    match parts.as_slice() {
        [day, month, year] => {
            NaiveDate::from_ymd_opt(parse_year(year)?, parse_component(month)?, parse_component(day)?)
        }
        [month, year] => NaiveDate::from_ymd_opt(parse_year(year)?, parse_component(month)?, 1),
        [year] => NaiveDate::from_ymd_opt(parse_year(year)?, 1, 1),
        _ => None,
    }
}

/// A day or month field: one or two ASCII digits.
fn parse_component(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// A year field: four digits taken literally, or two digits resolved with the
/// strptime pivot (00–68 → 20xx, 69–99 → 19xx).
fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match s.len() {
        4 => s.parse().ok(),
        2 => {
            let y: i32 = s.parse().ok()?;
            Some(if y <= 68 { 2000 + y } else { 1900 + y })
        }
        _ => None,
    }
}

/// A recognized date strictly earlier than `today` at any of (year, month, day)
/// marks the product expired; the same day or later does not.
pub fn expiry_status(expiry: NaiveDate, today: NaiveDate) -> ExpiryStatus {
    if expiry < today {
        ExpiryStatus::Yes
    } else {
        ExpiryStatus::No
    }
}

/// Whole days from `now` to midnight of the expiry date, floored.
///
/// The floor means a product expiring today already reads `None` even though
/// its status is still "No" — the day-level comparison and the day-count use
/// different granularities on purpose.
pub fn lifespan_days(expiry: NaiveDate, now: NaiveDateTime) -> Option<i64> {
    let delta = expiry.and_time(NaiveTime::MIN).signed_duration_since(now);
    let days = delta.num_seconds().div_euclid(86_400);
    (days >= 0).then_some(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn full_date_parses() {
        assert_eq!(parse_expiry_date("01/12/2024"), Some(date(2024, 12, 1)));
        assert_eq!(parse_expiry_date("5/6/2027"), Some(date(2027, 6, 5)));
    }

    #[test]
    fn two_digit_year_matches_four_digit() {
        assert_eq!(parse_expiry_date("01/12/24"), parse_expiry_date("01/12/2024"));
        assert_eq!(parse_expiry_date("01/12/99"), Some(date(1999, 12, 1)));
        assert_eq!(parse_expiry_date("01/12/68"), Some(date(2068, 12, 1)));
        assert_eq!(parse_expiry_date("01/12/69"), Some(date(1969, 12, 1)));
    }

    #[test]
    fn partial_forms_default_missing_components_to_one() {
        assert_eq!(parse_expiry_date("06/2025"), Some(date(2025, 6, 1)));
        assert_eq!(parse_expiry_date("06/25"), Some(date(2025, 6, 1)));
        assert_eq!(parse_expiry_date("2025"), Some(date(2025, 1, 1)));
        assert_eq!(parse_expiry_date("25"), Some(date(2025, 1, 1)));
    }

    #[test]
    fn unrecognized_dates_yield_none() {
        assert_eq!(parse_expiry_date("NA"), None);
        assert_eq!(parse_expiry_date(""), None);
        assert_eq!(parse_expiry_date("best before winter"), None);
        assert_eq!(parse_expiry_date("13/2025/01/01"), None);
        // Calendar-invalid components are rejected, not clamped.
        assert_eq!(parse_expiry_date("31/02/2024"), None);
        assert_eq!(parse_expiry_date("13/2025"), None);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(parse_expiry_date("  01/12/2024  "), Some(date(2024, 12, 1)));
    }

    #[test]
    fn status_is_day_granular() {
        let today = date(2024, 6, 15);
        assert_eq!(expiry_status(date(2024, 6, 14), today), ExpiryStatus::Yes);
        assert_eq!(expiry_status(date(2024, 6, 15), today), ExpiryStatus::No);
        assert_eq!(expiry_status(date(2024, 6, 16), today), ExpiryStatus::No);
        assert_eq!(expiry_status(date(2023, 12, 31), today), ExpiryStatus::Yes);
    }

    #[test]
    fn lifespan_floors_toward_past() {
        let now = date(2024, 6, 15).and_hms_opt(10, 0, 0).unwrap();
        // Expiring today: midnight already passed, floored below zero.
        assert_eq!(lifespan_days(date(2024, 6, 15), now), None);
        // Tomorrow's midnight is 14 hours away: zero whole days.
        assert_eq!(lifespan_days(date(2024, 6, 16), now), Some(0));
        assert_eq!(lifespan_days(date(2024, 6, 25), now), Some(9));
        assert_eq!(lifespan_days(date(2024, 6, 1), now), None);
    }
}
