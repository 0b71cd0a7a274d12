//! Monday-anchored weekly windows and the new-week rollover.

use crate::store::{DayEntry, Store};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const WEEKLY_TARGET_HOURS: f64 = 35.0;

/// The Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The seven dates of the week containing `date`, Monday first.
pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(date);
    (0..7).map(|i| start + Duration::days(i)).collect()
}

/// Sum of `hours_worked` over the week containing `reference`.
/// Days without a record or without derived fields count 0.
pub fn weekly_hours(store: &Store, reference: NaiveDate) -> f64 {
    week_dates(reference)
        .into_iter()
        .filter_map(|d| store.entry(d))
        .map(DayEntry::hours)
        .sum()
}

/// True on a Monday whose entry is still absent or empty.
pub fn is_first_monday_input(store: &Store, date: NaiveDate) -> bool {
    if date.weekday() != Weekday::Mon {
        return false;
    }

    store.entry(date).is_none_or(DayEntry::is_empty)
}

/// Clear the previous week's entries on the first write of a Monday.
///
/// Returns `Some(removed)` when the rollover fired, `None` otherwise.
/// Settings are preserved.
pub fn apply_rollover(store: &mut Store, date: NaiveDate) -> Option<usize> {
    if !is_first_monday_input(store, date) {
        return None;
    }

    // an empty Monday placeholder is not a previous-week entry
    let placeholder = usize::from(store.entry(date).is_some());
    Some(store.clear_entries() - placeholder)
}

/// Entries of one week, in date order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekGroup {
    pub week_start: NaiveDate,
    pub days: Vec<(NaiveDate, DayEntry)>,
    pub total_hours: f64,
}

/// All stored entries grouped by week, oldest first.
pub fn group_by_week(store: &Store) -> Vec<WeekGroup> {
    let mut groups: Vec<WeekGroup> = Vec::new();

    for (date, entry) in &store.entries {
        let ws = week_start(*date);

        match groups.last_mut() {
            Some(g) if g.week_start == ws => {
                g.total_hours += entry.hours();
                g.days.push((*date, entry.clone()));
            }
            _ => groups.push(WeekGroup {
                week_start: ws,
                days: vec![(*date, entry.clone())],
                total_hours: entry.hours(),
            }),
        }
    }

    groups
}
