//! Live projection of the current work session.
//!
//! Given today's started-but-not-ended entry and the current instant, compute
//! how long the session has run, when the 7h daily target is met and, once the
//! week is far enough along, when the 35h weekly target is met.

use crate::core::weekly::{WEEKLY_TARGET_HOURS, weekly_hours};
use crate::store::Store;
use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Net daily target, lunch excluded.
pub const DAILY_TARGET_MINUTES: i64 = 7 * 60;

/// Elapsed minutes after which the lunch break is deducted in full.
pub const LUNCH_THRESHOLD_MINUTES: i64 = 4 * 60;

/// The weekly projection is only shown once the stored week exceeds this.
pub const WEEKLY_GATE_HOURS: f64 = 27.0;

/// A target clock time and the time left until it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub at: NaiveTime,
    pub minutes: i64,
}

impl Countdown {
    pub fn hours(&self) -> i64 {
        self.minutes / 60
    }

    pub fn mins(&self) -> i64 {
        self.minutes % 60
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub start: NaiveTime,
    pub elapsed_minutes: i64,
    pub worked_minutes: i64,
    pub lunch_minutes: u32,

    /// Hours of the current week already stored, today's session excluded.
    pub weekly_hours: f64,
    pub remaining_weekly_hours: f64,

    pub daily: Option<Countdown>,
    pub daily_target_reached: bool,

    pub show_weekly_target: bool,
    pub weekly: Option<Countdown>,
    pub weekly_target_reached: bool,
    pub minutes_needed_for_weekly: i64,
}

/// What the counter shows under the progress lines, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLine {
    WeeklyReached,
    DailyReached,
    Daily(Countdown),
    Weekly(Countdown),
    WeeklyAlreadyReached,
}

impl Projection {
    pub fn lunch_deducted(&self) -> bool {
        self.elapsed_minutes > LUNCH_THRESHOLD_MINUTES
    }

    pub fn target_lines(&self) -> Vec<TargetLine> {
        if self.weekly_target_reached {
            return vec![TargetLine::WeeklyReached];
        }

        let mut lines = Vec::new();

        if self.daily_target_reached {
            lines.push(TargetLine::DailyReached);
            if self.show_weekly_target
                && let Some(w) = self.weekly
            {
                lines.push(TargetLine::Weekly(w));
            }
            return lines;
        }

        if let Some(d) = self.daily {
            lines.push(TargetLine::Daily(d));
        }
        if self.show_weekly_target {
            lines.push(match self.weekly {
                Some(w) => TargetLine::Weekly(w),
                None => TargetLine::WeeklyAlreadyReached,
            });
        }
        lines
    }
}

/// Project today's active session, or `None` when there is none
/// (no start recorded today, or today's entry already ended).
pub fn project(store: &Store, now: NaiveDateTime) -> Option<Projection> {
    let today = now.date();
    let entry = store.entry(today)?;
    if !entry.is_active() {
        return None;
    }
    let start = entry.start?;

    let mut start_dt = today.and_time(start);
    if now < start_dt {
        start_dt -= Duration::days(1);
    }

    let lunch = store.lunch_minutes();
    let lunch_i = i64::from(lunch);

    let elapsed = (now - start_dt).num_minutes();
    let worked = if elapsed > LUNCH_THRESHOLD_MINUTES {
        elapsed - lunch_i
    } else {
        elapsed
    };

    // daily
    let daily_total = DAILY_TARGET_MINUTES + lunch_i;
    let until_daily = daily_total - elapsed;
    let daily = (until_daily > 0).then(|| Countdown {
        at: (start_dt + Duration::minutes(daily_total)).time(),
        minutes: until_daily,
    });

    // weekly, on stored entries only
    let week = weekly_hours(store, today);
    let remaining = WEEKLY_TARGET_HOURS - week;
    let show_weekly = week > WEEKLY_GATE_HOURS;

    let mut needed = remaining * 60.0 - worked as f64;
    if elapsed <= LUNCH_THRESHOLD_MINUTES {
        needed += lunch as f64;
    }
    let needed_secs = (needed * 60.0).round() as i64;

    let weekly = (show_weekly && needed_secs > 0).then(|| Countdown {
        at: (now + Duration::seconds(needed_secs)).time(),
        minutes: needed_secs / 60,
    });

    Some(Projection {
        start,
        elapsed_minutes: elapsed,
        worked_minutes: worked,
        lunch_minutes: lunch,
        weekly_hours: week,
        remaining_weekly_hours: remaining,
        daily,
        daily_target_reached: until_daily <= 0,
        show_weekly_target: show_weekly,
        weekly,
        weekly_target_reached: remaining <= worked as f64 / 60.0,
        minutes_needed_for_weekly: (needed_secs / 60).max(0),
    })
}
