use chrono::NaiveTime;
use rworklogger::core::projection::{Countdown, TargetLine, project};
use rworklogger::store::{DayEntry, Store};

mod common;
use common::{at, date};

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn done(h: f64) -> DayEntry {
    DayEntry {
        start: Some(t("08:00")),
        end: Some(t("18:00")),
        hours_worked: Some(h),
        total_minutes: Some((h * 60.0).round() as i64),
    }
}

/// Week of 2025-09-01: Monday and Tuesday stored, Wednesday started at `start`.
fn store_with(mon: f64, tue: f64, start: &str, lunch: u32) -> Store {
    let mut store = Store::default();
    store.settings.lunch_break_minutes = lunch;
    store.entries.insert(date("2025-09-01"), done(mon));
    store.entries.insert(date("2025-09-02"), done(tue));
    store
        .entries
        .insert(date("2025-09-03"), DayEntry::started(t(start)));
    store
}

#[test]
fn test_weekly_projection_hidden_at_26_hours() {
    let store = store_with(13.0, 13.0, "09:00", 30);
    let p = project(&store, at("2025-09-03 10:00")).unwrap();

    assert_eq!(p.weekly_hours, 26.0);
    assert!(!p.show_weekly_target);
    assert_eq!(p.weekly, None);
    assert_eq!(p.elapsed_minutes, 60);
    assert_eq!(p.worked_minutes, 60);
    assert_eq!(
        p.daily,
        Some(Countdown {
            at: t("16:30"),
            minutes: 390
        })
    );
    assert!(!p.daily_target_reached);
    assert!(!p.weekly_target_reached);
    assert_eq!(
        p.target_lines(),
        vec![TargetLine::Daily(Countdown {
            at: t("16:30"),
            minutes: 390
        })]
    );
}

#[test]
fn test_weekly_projection_shown_at_28_hours() {
    let store = store_with(14.0, 14.0, "09:00", 30);
    let p = project(&store, at("2025-09-03 10:00")).unwrap();

    assert!(p.show_weekly_target);
    assert_eq!(p.remaining_weekly_hours, 7.0);
    // 420 - 60 worked + 30 lunch still to come
    let weekly = Countdown {
        at: t("16:30"),
        minutes: 390,
    };
    assert_eq!(p.weekly, Some(weekly));
    assert_eq!(p.minutes_needed_for_weekly, 390);
    assert_eq!(p.target_lines().len(), 2);
    assert_eq!(p.target_lines()[1], TargetLine::Weekly(weekly));
}

#[test]
fn test_weekly_projection_with_fractional_hours() {
    let store = store_with(14.25, 14.0, "09:00", 30);
    let p = project(&store, at("2025-09-03 10:00")).unwrap();

    assert_eq!(
        p.weekly,
        Some(Countdown {
            at: t("16:15"),
            minutes: 375
        })
    );
}

#[test]
fn test_lunch_deducted_only_after_four_hours() {
    let store = store_with(7.0, 7.0, "08:00", 30);

    let p = project(&store, at("2025-09-03 12:00")).unwrap();
    assert_eq!(p.elapsed_minutes, 240);
    assert_eq!(p.worked_minutes, 240);
    assert!(!p.lunch_deducted());

    let p = project(&store, at("2025-09-03 12:01")).unwrap();
    assert_eq!(p.elapsed_minutes, 241);
    assert_eq!(p.worked_minutes, 211);
    assert!(p.lunch_deducted());
}

#[test]
fn test_daily_target_reached_drops_the_countdown() {
    let store = store_with(7.0, 7.0, "08:00", 30);
    let p = project(&store, at("2025-09-03 15:30")).unwrap();

    assert!(p.daily_target_reached);
    assert_eq!(p.daily, None);
    assert_eq!(p.target_lines(), vec![TargetLine::DailyReached]);
}

#[test]
fn test_daily_reached_still_shows_weekly_projection() {
    let store = store_with(14.0, 13.5, "08:00", 0);
    let p = project(&store, at("2025-09-03 15:10")).unwrap();

    assert!(p.daily_target_reached);
    assert!(!p.weekly_target_reached);
    let weekly = Countdown {
        at: t("15:30"),
        minutes: 20,
    };
    assert_eq!(
        p.target_lines(),
        vec![TargetLine::DailyReached, TargetLine::Weekly(weekly)]
    );
}

#[test]
fn test_weekly_target_reached_takes_priority() {
    let store = store_with(16.5, 16.5, "09:00", 30);
    let p = project(&store, at("2025-09-03 11:30")).unwrap();

    assert!(p.weekly_target_reached);
    assert!(!p.daily_target_reached);
    assert_eq!(p.target_lines(), vec![TargetLine::WeeklyReached]);
}

#[test]
fn test_pending_lunch_is_added_before_checking_the_weekly_countdown() {
    // 31h stored, 4h worked: nothing left on paper, but lunch is still ahead
    let store = store_with(15.5, 15.5, "09:00", 30);
    let p = project(&store, at("2025-09-03 13:00")).unwrap();

    assert_eq!(
        p.weekly,
        Some(Countdown {
            at: t("13:30"),
            minutes: 30
        })
    );
    assert!(p.weekly_target_reached);
}

#[test]
fn test_weekly_countdown_runs_out() {
    // 29h stored: the weekly target is met before the daily one
    let store = store_with(14.5, 14.5, "06:00", 60);
    let p = project(&store, at("2025-09-03 12:30")).unwrap();

    // elapsed 390, worked 330; 6h remaining = 360 needed - 330 = 30
    assert_eq!(p.worked_minutes, 330);
    assert_eq!(
        p.weekly,
        Some(Countdown {
            at: t("13:00"),
            minutes: 30
        })
    );

    let p = project(&store, at("2025-09-03 13:00")).unwrap();
    assert_eq!(p.weekly, None);
    assert!(p.weekly_target_reached);
    assert_eq!(p.target_lines(), vec![TargetLine::WeeklyReached]);
}

#[test]
fn test_session_started_late_is_counted_overnight() {
    let mut store = Store::default();
    store
        .entries
        .insert(date("2025-09-03"), DayEntry::started(t("23:30")));

    let p = project(&store, at("2025-09-03 00:30")).unwrap();
    assert_eq!(p.elapsed_minutes, 60);
}

#[test]
fn test_no_active_session() {
    let mut store = Store::default();
    assert!(project(&store, at("2025-09-03 10:00")).is_none());

    // only yesterday is open
    store
        .entries
        .insert(date("2025-09-02"), DayEntry::started(t("09:00")));
    assert!(project(&store, at("2025-09-03 10:00")).is_none());

    // today already ended
    store.entries.insert(date("2025-09-03"), done(7.0));
    assert!(project(&store, at("2025-09-03 19:00")).is_none());
}
