//! Time utilities: parsing HH:MM and minute arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse a user-supplied HH:MM value.
pub fn parse_time_arg(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTimeFormat(t.trim().to_string()))
}

/// Parse an optional HH:MM value; blank input counts as "not given".
pub fn parse_optional_time(input: Option<&str>) -> AppResult<Option<NaiveTime>> {
    match input.map(str::trim) {
        Some(s) if !s.is_empty() => parse_time_arg(s).map(Some),
        _ => Ok(None),
    }
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Drop seconds and sub-seconds: entries are stored with minute resolution.
pub fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(dt)
}

/// Floor-based split used by the session counter (`-30` → `-1h 30m`).
pub fn split_hm(mins: i64) -> (i64, i64) {
    (mins.div_euclid(60), mins.rem_euclid(60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_hh_mm_only() {
        assert_eq!(parse_time(" 07:05 "), NaiveTime::from_hms_opt(7, 5, 0));
        assert!(parse_time("24:00").is_none());
        assert!(parse_time("09:00:30").is_none());
        assert!(parse_time("").is_none());
    }

    #[test]
    fn blank_optional_time_is_none() {
        assert_eq!(parse_optional_time(None).unwrap(), None);
        assert_eq!(parse_optional_time(Some("   ")).unwrap(), None);
        assert!(matches!(
            parse_optional_time(Some("noon")),
            Err(AppError::InvalidTimeFormat(s)) if s == "noon"
        ));
    }

    #[test]
    fn truncates_seconds() {
        let dt = NaiveDate::from_ymd_opt(2025, 9, 3)
            .and_then(|d| d.and_hms_milli_opt(9, 41, 59, 250))
            .unwrap();
        assert_eq!(format_time(truncate_to_minute(dt).time()), "09:41");
        assert_eq!(truncate_to_minute(dt).second(), 0);
    }

    #[test]
    fn split_floors_negative_minutes() {
        assert_eq!(split_hm(125), (2, 5));
        assert_eq!(split_hm(-30), (-1, 30));
    }
}
