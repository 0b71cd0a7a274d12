use chrono::NaiveTime;
use rworklogger::core::accounting::{
    compute_worked, recalculate_all, recompute_entry, round2, span_minutes,
};
use rworklogger::errors::AppError;
use rworklogger::store::{DayEntry, Store};

mod common;
use common::date;

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn complete(start: &str, end: &str, lunch: u32, day: &str) -> DayEntry {
    let mut e = DayEntry {
        start: Some(t(start)),
        end: Some(t(end)),
        ..Default::default()
    };
    recompute_entry(date(day), &mut e, lunch);
    e
}

#[test]
fn test_same_day_span_minus_lunch() {
    let d = date("2025-09-02");

    let w = compute_worked(d, "09:00", "17:00", 30).unwrap();
    assert_eq!(w.total_minutes, 450);
    assert_eq!(w.hours_worked, 7.5);

    let w = compute_worked(d, "08:55", "17:10", 45).unwrap();
    assert_eq!(w.total_minutes, 450);
    assert_eq!(w.hours_worked, 7.5);

    let w = compute_worked(d, "09:00", "16:50", 0).unwrap();
    assert_eq!(w.total_minutes, 470);
    assert_eq!(w.hours_worked, round2(470.0 / 60.0));
    assert_eq!(w.hours_worked, 7.83);
}

#[test]
fn test_overnight_shift_rolls_end_to_next_day() {
    let w = compute_worked(date("2025-09-02"), "23:00", "01:00", 30).unwrap();
    assert_eq!(w.total_minutes, 90);
    assert_eq!(w.hours_worked, 1.5);

    assert_eq!(span_minutes(date("2025-09-02"), t("22:15"), t("06:45")), 510);
}

#[test]
fn test_equal_start_and_end_is_zero_span() {
    let w = compute_worked(date("2025-09-02"), "09:00", "09:00", 0).unwrap();
    assert_eq!(w.total_minutes, 0);
    assert_eq!(w.hours_worked, 0.0);
}

#[test]
fn test_lunch_longer_than_span_goes_negative() {
    // known edge case: the deduction is not clamped
    let w = compute_worked(date("2025-09-02"), "09:00", "09:20", 60).unwrap();
    assert_eq!(w.total_minutes, -40);
    assert_eq!(w.hours_worked, -0.67);
}

#[test]
fn test_invalid_time_format_is_rejected() {
    let d = date("2025-09-02");

    assert!(matches!(
        compute_worked(d, "9am", "17:00", 30),
        Err(AppError::InvalidTimeFormat(s)) if s == "9am"
    ));
    assert!(matches!(
        compute_worked(d, "09:00", "25:00", 30),
        Err(AppError::InvalidTimeFormat(_))
    ));
    assert!(matches!(
        compute_worked(d, "09:00", "", 30),
        Err(AppError::InvalidTimeFormat(_))
    ));
}

#[test]
fn test_recompute_clears_derived_fields_on_incomplete_entry() {
    let mut e = complete("09:00", "17:00", 30, "2025-09-02");
    assert_eq!(e.total_minutes, Some(450));

    e.end = None;
    assert!(recompute_entry(date("2025-09-02"), &mut e, 30).is_none());
    assert_eq!(e.hours_worked, None);
    assert_eq!(e.total_minutes, None);
}

#[test]
fn test_recalculate_all_uses_current_lunch_and_skips_open_days() {
    let mut store = Store::default();
    store
        .entries
        .insert(date("2025-09-01"), complete("09:00", "17:00", 30, "2025-09-01"));
    store
        .entries
        .insert(date("2025-09-02"), complete("23:00", "01:00", 30, "2025-09-02"));
    store
        .entries
        .insert(date("2025-09-03"), DayEntry::started(t("08:30")));

    store.settings.lunch_break_minutes = 60;
    let n = recalculate_all(&mut store);

    assert_eq!(n, 2);

    let mon = store.entry(date("2025-09-01")).unwrap();
    assert_eq!(mon.total_minutes, Some(420));
    assert_eq!(mon.hours_worked, Some(7.0));

    let tue = store.entry(date("2025-09-02")).unwrap();
    assert_eq!(tue.total_minutes, Some(60));

    let wed = store.entry(date("2025-09-03")).unwrap();
    assert_eq!(wed, &DayEntry::started(t("08:30")));
}
