//! Worked-time accounting: span between start and end, net of the lunch break.

use crate::errors::AppResult;
use crate::store::{DayEntry, Store};
use crate::utils::time::parse_time_arg;
use chrono::{Duration, NaiveDate, NaiveTime};

/// Derived fields of a complete day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkedTime {
    pub hours_worked: f64,
    pub total_minutes: i64,
}

/// Round to two decimals (the stored precision of `hours_worked`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Minutes from `start` to `end` on `date`.
/// An `end` earlier than `start` on the wall clock belongs to the next day.
pub fn span_minutes(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> i64 {
    let start_dt = date.and_time(start);
    let mut end_dt = date.and_time(end);

    if end_dt < start_dt {
        end_dt += Duration::days(1);
    }

    (end_dt - start_dt).num_minutes()
}

/// Worked time for already-parsed times.
///
/// The lunch break is always deducted, even when it exceeds the span: the
/// result is then negative and is kept as such.
pub fn worked_between(date: NaiveDate, start: NaiveTime, end: NaiveTime, lunch: u32) -> WorkedTime {
    let worked = span_minutes(date, start, end) - i64::from(lunch);

    WorkedTime {
        hours_worked: round2(worked as f64 / 60.0),
        total_minutes: worked,
    }
}

/// Worked time for `HH:MM` strings.
pub fn compute_worked(date: NaiveDate, start: &str, end: &str, lunch: u32) -> AppResult<WorkedTime> {
    let start = parse_time_arg(start)?;
    let end = parse_time_arg(end)?;
    Ok(worked_between(date, start, end, lunch))
}

/// Bring the derived fields of `entry` in line with its times.
/// Returns the new worked time when the entry is complete.
pub fn recompute_entry(date: NaiveDate, entry: &mut DayEntry, lunch: u32) -> Option<WorkedTime> {
    match (entry.start, entry.end) {
        (Some(start), Some(end)) => {
            let worked = worked_between(date, start, end, lunch);
            entry.hours_worked = Some(worked.hours_worked);
            entry.total_minutes = Some(worked.total_minutes);
            Some(worked)
        }
        _ => {
            entry.clear_derived();
            None
        }
    }
}

/// Recalculate every complete entry with the store's current lunch break.
/// Entries missing a start or an end are left untouched.
pub fn recalculate_all(store: &mut Store) -> usize {
    let lunch = store.lunch_minutes();
    let mut count = 0;

    for (date, entry) in store.entries.iter_mut() {
        if entry.is_complete() {
            recompute_entry(*date, entry, lunch);
            count += 1;
        }
    }

    count
}
