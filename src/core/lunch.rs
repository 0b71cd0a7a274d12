//! Lunch break presets and validation.

use crate::errors::{AppError, AppResult};

pub const MAX_LUNCH_MINUTES: u32 = 120;

/// Menu presets, in menu order.
pub const PRESETS: [(&str, u32); 5] = [
    ("No lunch break", 0),
    ("Short break", 15),
    ("Standard break", 30),
    ("Long break", 45),
    ("One hour break", 60),
];

/// Validate a custom duration typed by the user.
pub fn parse_minutes(raw: &str) -> AppResult<u32> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidLunchDuration(raw.trim().to_string()))?;

    validate_minutes(value)
}

pub fn validate_minutes(value: i64) -> AppResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|m| *m <= MAX_LUNCH_MINUTES)
        .ok_or_else(|| AppError::InvalidLunchDuration(value.to_string()))
}

/// Minutes for preset number `n` (1-based, as listed in the menu).
pub fn preset(n: usize) -> Option<u32> {
    n.checked_sub(1)
        .and_then(|i| PRESETS.get(i))
        .map(|(_, minutes)| *minutes)
}
